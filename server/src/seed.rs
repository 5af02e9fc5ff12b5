//! Startup seeding from a JSON file.
//!
//! The file holds an array of creation payloads. Each entry is validated the
//! same way `POST /todos` would validate it before anything is inserted.

use std::path::Path;

use thiserror::Error;
use todo_core::{NewTodo, ValidationError};
use tracing::info;

use crate::store::{StoreError, TodoStore};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not a JSON array of todos: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed entry {index} is invalid: {source}")]
    Invalid {
        index: usize,
        source: ValidationError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Decode and validate seed entries without touching storage.
pub fn parse_seed(raw: &str) -> Result<Vec<NewTodo>, SeedError> {
    let todos: Vec<NewTodo> = serde_json::from_str(raw)?;
    for (index, todo) in todos.iter().enumerate() {
        todo.validate()
            .map_err(|source| SeedError::Invalid { index, source })?;
    }
    Ok(todos)
}

/// Insert every entry of the seed file at `path`, returning how many were
/// stored.
pub async fn seed_store(store: &dyn TodoStore, path: &Path) -> Result<usize, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let todos = parse_seed(&raw)?;
    let count = todos.len();
    for todo in todos {
        store.insert(todo).await?;
    }
    info!(count, path = %path.display(), "seeded todos");
    Ok(count)
}
