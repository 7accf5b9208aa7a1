//! Concurrent in-memory storage for todos.
//!
//! # Design
//! `InMemoryStore` keeps the todos in a `HashMap` behind one `RwLock`.
//! Reads (`get_by_id`, `get_all`) share the lock; writes (`add`, `update`,
//! `delete`) take it exclusively, so a reader never sees a half-applied
//! write. Ids come from an `AtomicU64` that only ever grows. The counter is
//! bumped while the write lock is held, which makes the id order of
//! concurrent `add` calls match the order they acquired the lock.
//!
//! The store takes payloads by value and hands back the stored copy with
//! its id set. Nothing the caller still holds is mutated.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::StoreError;
use crate::model::{Todo, TodoId};

/// Backend contract used by the service layer.
pub trait Store: Send + Sync {
    /// Validate and insert `todo` under a freshly assigned id, ignoring any
    /// id the caller put on it. Returns the stored todo.
    fn add(&self, todo: Option<Todo>) -> Result<Todo, StoreError>;

    fn get_by_id(&self, id: TodoId) -> Result<Todo, StoreError>;

    /// Every stored todo, in no particular order.
    fn get_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Replace the todo stored under `id` with `todo`. The stored id is
    /// always `id`; an id inside the payload is ignored.
    fn update(&self, id: TodoId, todo: Option<Todo>) -> Result<Todo, StoreError>;

    /// Remove the todo with `todo.id`. Removing an unknown id succeeds.
    fn delete(&self, todo: Option<&Todo>) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    counter: AtomicU64,
    todos: RwLock<HashMap<TodoId, Todo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored todos. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.read().map(|todos| todos.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<TodoId, Todo>>, StoreError> {
        self.todos.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<TodoId, Todo>>, StoreError> {
        self.todos.write().map_err(|_| poisoned())
    }

    fn next_id(&self) -> TodoId {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("todo map lock poisoned".to_string())
}

impl Store for InMemoryStore {
    fn add(&self, todo: Option<Todo>) -> Result<Todo, StoreError> {
        let mut todo = todo.ok_or(StoreError::NilTodo)?;
        todo.is_valid()?;

        let mut todos = self.write()?;
        todo.id = self.next_id();
        todos.insert(todo.id, todo.clone());
        debug!(id = todo.id, "todo added");

        Ok(todo)
    }

    fn get_by_id(&self, id: TodoId) -> Result<Todo, StoreError> {
        let todos = self.read()?;
        todos.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.read()?;
        Ok(todos.values().cloned().collect())
    }

    fn update(&self, id: TodoId, todo: Option<Todo>) -> Result<Todo, StoreError> {
        let mut todo = todo.ok_or(StoreError::NilTodo)?;
        todo.is_valid()?;
        todo.id = id;

        let mut todos = self.write()?;
        let stored = todos.get_mut(&id).ok_or(StoreError::NotFound)?;
        *stored = todo.clone();
        debug!(id, "todo updated");

        Ok(todo)
    }

    fn delete(&self, todo: Option<&Todo>) -> Result<(), StoreError> {
        let todo = todo.ok_or(StoreError::NilTodo)?;
        let removed = self.write()?.remove(&todo.id).is_some();
        debug!(id = todo.id, removed, "todo deleted");
        Ok(())
    }
}
