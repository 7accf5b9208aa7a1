//! Error types for the store and the service.
//!
//! # Design
//! `StoreError` is the precise, closed set a backend reports. `ServiceError`
//! passes `NotFound` through as its own variant because callers need to tell
//! "the todo does not exist" apart from every other failure; all other
//! failures are wrapped with the operation that hit them.

use thiserror::Error;

/// Errors reported by a [`Store`](crate::store::Store).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No todo was supplied.
    #[error("nil todo")]
    NilTodo,

    /// A todo was supplied but failed validation (empty title).
    #[error("invalid todo")]
    InvalidTodo,

    /// The referenced id does not exist.
    #[error("todo not found")]
    NotFound,

    /// Anything else the backend could not handle.
    #[error("backend failure: {0}")]
    Backend(String),
}

/// Errors returned by a [`TodoService`](crate::service::TodoService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("todo not found")]
    NotFound,

    #[error("unexpected error from backend: {0}")]
    Backend(#[source] StoreError),

    #[error("failed to list todos: {0}")]
    List(#[source] StoreError),

    #[error("save failed: {0}")]
    Save(#[source] StoreError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound)
    }

    /// The store error underneath, if any.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            ServiceError::NotFound => None,
            ServiceError::Backend(e) | ServiceError::List(e) | ServiceError::Save(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_errors_carry_the_cause_in_the_message() {
        let err = ServiceError::Save(StoreError::InvalidTodo);
        assert_eq!(err.to_string(), "save failed: invalid todo");

        let err = ServiceError::Save(StoreError::NilTodo);
        assert_eq!(err.to_string(), "save failed: nil todo");
    }

    #[test]
    fn not_found_is_only_the_dedicated_variant() {
        assert!(ServiceError::NotFound.is_not_found());
        assert!(!ServiceError::Save(StoreError::NotFound).is_not_found());
        assert_eq!(
            ServiceError::Save(StoreError::NotFound).store_error(),
            Some(&StoreError::NotFound)
        );
    }
}
