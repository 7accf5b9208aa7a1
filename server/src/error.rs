//! Error responses for the HTTP layer.
//!
//! # Design
//! Every failure leaves the server as `{"error": "<message>"}` with a status
//! chosen by [`ApiError::status`]. An empty message is never sent; it is
//! replaced by [`EMPTY_MESSAGE_PLACEHOLDER`] at serialization time so the
//! guarantee holds however the `FailResponse` was built.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use todo_core::ServiceError;
use tracing::{debug, error};

pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "an unexpected error has occurred";

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailResponse {
    #[serde(serialize_with = "placeholder_if_empty")]
    pub error: String,
}

impl FailResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn placeholder_if_empty<S: Serializer>(error: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if error.is_empty() {
        serializer.serialize_str(EMPTY_MESSAGE_PLACEHOLDER)
    } else {
        serializer.serialize_str(error)
    }
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    #[error("invalid parameter: '{0}' cannot be converted to int")]
    InvalidParameter(String),

    #[error("failed decoding request body: {0}")]
    Decode(String),

    #[error("fetch with id {0}: todo not found")]
    NotFound(String),

    #[error("failed saving todo: {0}")]
    Save(#[source] ServiceError),

    #[error("failed fetching todos: {0}")]
    Fetch(#[source] ServiceError),

    #[error("something went wrong: {0}")]
    Unexpected(#[source] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Save(_) | ApiError::Fetch(_) | ApiError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %message, "request failed");
        } else {
            debug!(%status, error = %message, "request rejected");
        }
        (status, Json(FailResponse::new(message))).into_response()
    }
}
