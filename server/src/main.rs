use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_core::{InMemoryStore, TodoApp};
use todo_server::{Config, SharedService};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "todo_server=info,todo_core=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment is used as is.
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("loading configuration")?;
    let service: SharedService = Arc::new(TodoApp::new(InMemoryStore::new()));
    let app = todo_server::app_with(service, &config);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, timeout = ?config.request_timeout, "listening");

    todo_server::run_until(listener, app, shutdown_signal())
        .await
        .context("serving requests")?;

    info!("shut down");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("ctrl-c received, draining connections");
}
