//! `/v0/todos` handlers.
//!
//! # Design
//! Handlers only decode, call the service and encode. The body extractor is
//! wrapped in `Result` so decoding failures come back as [`ApiError::Decode`]
//! (400 with a JSON body) instead of axum's plain-text rejection. A `null`
//! body decodes to `None` and reaches the service as a nil todo.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use todo_core::{sort_by_id, Todo, TodoId, TodoService};

use crate::error::ApiError;

pub type SharedService = Arc<dyn TodoService>;

type TodoBody = Result<Json<Option<Todo>>, JsonRejection>;

pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/v0/todos", get(list_todos).post(create_todo))
        .route("/v0/todos/{id}", get(get_todo).put(update_todo))
        .with_state(service)
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidParameter(raw.to_string()))
}

/// Listed by id so responses are stable across calls.
async fn list_todos(State(service): State<SharedService>) -> Result<Json<Vec<Todo>>, ApiError> {
    let mut todos = service.get_todos().map_err(ApiError::Fetch)?;
    sort_by_id(&mut todos);
    Ok(Json(todos))
}

async fn create_todo(
    State(service): State<SharedService>,
    body: TodoBody,
) -> Result<Json<Todo>, ApiError> {
    let Json(todo) = body?;
    let saved = service.save_todo(todo).map_err(ApiError::Save)?;
    Ok(Json(saved))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(raw): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw)?;
    match service.get_todo(id) {
        Ok(todo) => Ok(Json(todo)),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound(raw)),
        Err(e) => Err(ApiError::Unexpected(e)),
    }
}

async fn update_todo(
    State(service): State<SharedService>,
    Path(raw): Path<String>,
    body: TodoBody,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw)?;
    let Json(todo) = body?;
    let updated = service.update_todo(id, todo).map_err(ApiError::Save)?;
    Ok(Json(updated))
}
