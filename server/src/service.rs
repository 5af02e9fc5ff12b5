//! Todo lookups and mutations, independent of HTTP.
//!
//! # Design
//! Handlers hand raw path and query input to `TodoService`, which parses it,
//! turns it into storage calls, and reports failures as `AppError`. The
//! service holds nothing but the shared store handle, so cloning it per
//! request is cheap and requests never see each other's state.

use std::sync::Arc;

use todo_core::{NewTodo, Todo, TodoId, TodoQuery};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::store::TodoStore;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Fetch the todo whose id is the textual `id`.
    #[instrument(skip(self))]
    pub async fn get_todo(&self, id: &str) -> Result<Todo, AppError> {
        let id = TodoId::parse(id)?;
        self.store.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    /// List the todos selected by the request's query parameters.
    ///
    /// An empty result is not an error.
    #[instrument(skip(self))]
    pub async fn list_todos(&self, params: &[(String, String)]) -> Result<Vec<Todo>, AppError> {
        let query = TodoQuery::from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        let predicate = query.predicate();
        debug!(?predicate, "listing todos");
        let todos = self.store.find(&predicate).await?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    #[instrument(skip(self, input), fields(owner = %input.owner))]
    pub async fn create_todo(&self, input: NewTodo) -> Result<TodoId, AppError> {
        input.validate()?;
        let id = self.store.insert(input).await?;
        info!(%id, "created todo");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn delete_todo(&self, id: &str) -> Result<(), AppError> {
        let id = TodoId::parse(id)?;
        if self.store.delete(id).await? {
            info!(%id, "deleted todo");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
