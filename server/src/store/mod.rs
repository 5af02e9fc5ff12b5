//! Storage collaborators for todos.
//!
//! # Design
//! The service talks to storage only through `TodoStore`. Backends receive an
//! already validated `Predicate` and return records in their natural order;
//! no backend sorts. `MemoryStore` evaluates predicates in process and
//! `MongoStore` translates them into a query document.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::{to_document, MongoStore, COLLECTION};

use async_trait::async_trait;
use thiserror::Error;
use todo_core::{NewTodo, Predicate, Todo, TodoId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// All records satisfying `predicate`, in storage order.
    async fn find(&self, predicate: &Predicate) -> Result<Vec<Todo>, StoreError>;

    /// Store a new record and return the identifier assigned to it.
    async fn insert(&self, todo: NewTodo) -> Result<TodoId, StoreError>;

    /// Remove a record. Returns `false` when no record had that id.
    async fn delete(&self, id: TodoId) -> Result<bool, StoreError>;
}
