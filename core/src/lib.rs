//! Thread-safe todo store and the service that fronts it.
//!
//! # Overview
//! [`InMemoryStore`] owns the todos and hands out ids; [`TodoApp`] validates
//! input and translates store failures for a transport layer. Both sit
//! behind traits ([`Store`], [`TodoService`]) so a persistent backend can be
//! swapped in without touching the service.
//!
//! # Design
//! - The store is constructed explicitly and moved into the service; there
//!   are no globals.
//! - One `RwLock` guards the map: lookups share it, mutations are
//!   exclusive. Ids come from an atomic counter and are never reused.
//! - Errors are closed enums, so "not found" is matched on, never parsed
//!   out of a message.

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{ServiceError, StoreError};
pub use model::{sort_by_id, sort_by_title, validate, Todo, TodoId};
pub use service::{TodoApp, TodoService};
pub use store::{InMemoryStore, Store};
