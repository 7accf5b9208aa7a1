//! HTTP transport for the todo service.
//!
//! # Design
//! The router only talks to a [`TodoService`](todo_core::TodoService)
//! trait object, so tests can build it in-process with [`app`] and drive it
//! with `tower::ServiceExt::oneshot`, while `main` wires a real listener
//! through [`run_until`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use todo_core::{InMemoryStore, TodoApp};
use tower_http::timeout::TimeoutLayer;

pub use config::{Config, ConfigError};
pub use error::{ApiError, FailResponse, EMPTY_MESSAGE_PLACEHOLDER};
pub use routes::SharedService;

/// A router over a fresh, empty in-memory store with default settings.
pub fn app() -> Router {
    let service: SharedService = Arc::new(TodoApp::new(InMemoryStore::new()));
    app_with(service, &Config::default())
}

/// The full stack: routes, request timeout, CORS and request logging.
pub fn app_with(service: SharedService, config: &Config) -> Router {
    routes::router(service)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(middleware::cors())
        .layer(axum::middleware::from_fn(middleware::log_requests))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_until(listener, app(), std::future::pending::<()>()).await
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}
