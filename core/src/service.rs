//! Domain operations exposed to the transport layer.
//!
//! # Design
//! `TodoApp` owns the store it is handed at construction time; there is no
//! global state. It validates input before the store sees it and turns
//! store errors into [`ServiceError`]s: `NotFound` from a lookup is passed
//! through, everything else is wrapped with the operation that failed.

use tracing::{debug, warn};

use crate::error::{ServiceError, StoreError};
use crate::model::{validate, Todo, TodoId};
use crate::store::Store;

/// Operations a transport layer may call.
pub trait TodoService: Send + Sync {
    fn get_todo(&self, id: TodoId) -> Result<Todo, ServiceError>;

    /// All todos, in no particular order.
    fn get_todos(&self) -> Result<Vec<Todo>, ServiceError>;

    /// Validate and store a new todo. Returns it with its assigned id.
    fn save_todo(&self, todo: Option<Todo>) -> Result<Todo, ServiceError>;

    fn update_todo(&self, id: TodoId, todo: Option<Todo>) -> Result<Todo, ServiceError>;
}

#[derive(Debug)]
pub struct TodoApp<S> {
    backend: S,
}

impl<S: Store> TodoApp<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn store(&self) -> &S {
        &self.backend
    }
}

impl<S: Store> TodoService for TodoApp<S> {
    fn get_todo(&self, id: TodoId) -> Result<Todo, ServiceError> {
        match self.backend.get_by_id(id) {
            Ok(todo) => Ok(todo),
            Err(StoreError::NotFound) => Err(ServiceError::NotFound),
            Err(e) => {
                warn!(id, error = %e, "lookup failed");
                Err(ServiceError::Backend(e))
            }
        }
    }

    fn get_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        self.backend.get_all().map_err(|e| {
            warn!(error = %e, "listing failed");
            ServiceError::List(e)
        })
    }

    fn save_todo(&self, todo: Option<Todo>) -> Result<Todo, ServiceError> {
        validate(todo.as_ref()).map_err(ServiceError::Save)?;

        let saved = self.backend.add(todo).map_err(ServiceError::Save)?;
        debug!(id = saved.id, "todo saved");
        Ok(saved)
    }

    fn update_todo(&self, id: TodoId, todo: Option<Todo>) -> Result<Todo, ServiceError> {
        validate(todo.as_ref()).map_err(ServiceError::Save)?;

        self.backend.update(id, todo).map_err(ServiceError::Save)
    }
}
