use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::{NewTodo, Predicate, Todo, TodoId};

use super::{StoreError, TodoStore};

/// In-process store keeping records in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding exactly `todos`, ids included.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos.into_iter().collect())),
        }
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == id).cloned())
    }

    async fn find(&self, predicate: &Predicate) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().filter(|t| predicate.matches(t)).cloned().collect())
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoId, StoreError> {
        let id = TodoId::new();
        self.todos.write().await.push(todo.into_todo(id));
        Ok(id)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() != before)
    }
}
