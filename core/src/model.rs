//! The todo record and its validation rules.
//!
//! # Design
//! Every field carries `#[serde(default)]` so a request body with missing
//! fields still decodes: a missing title becomes `""` and is rejected by
//! [`validate`] as [`StoreError::InvalidTodo`] rather than as malformed
//! input. An absent todo is modelled as `Option::None` and reported
//! separately as [`StoreError::NilTodo`].

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier assigned by the store. The first id handed out is 1.
pub type TodoId = u64;

/// A single todo item.
///
/// Field order is the wire order: `id`, `title`, `completed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: TodoId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// A not-yet-stored todo. The id is left at 0 until the store stamps it.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn is_valid(&self) -> Result<(), StoreError> {
        if self.title.is_empty() {
            return Err(StoreError::InvalidTodo);
        }
        Ok(())
    }
}

/// Check that a todo was supplied and that it has a title.
pub fn validate(todo: Option<&Todo>) -> Result<&Todo, StoreError> {
    let todo = todo.ok_or(StoreError::NilTodo)?;
    todo.is_valid()?;
    Ok(todo)
}

/// Sort ascending by id. `GetAll` makes no ordering promise, so callers
/// that need a stable listing sort explicitly.
pub fn sort_by_id(todos: &mut [Todo]) {
    todos.sort_by_key(|todo| todo.id);
}

/// Sort ascending by title, falling back to id for equal titles.
pub fn sort_by_title(todos: &mut [Todo]) {
    todos.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
}
