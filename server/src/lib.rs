//! HTTP server for the todos resource.
//!
//! # Routes
//! - `GET /todos?owner=&status=` lists todos matching the filter.
//! - `GET /todos/{id}` fetches one todo.
//! - `POST /todos` creates a todo and answers with its id.
//! - `DELETE /todos/{id}` removes a todo.

pub mod config;
pub mod error;
pub mod handlers;
pub mod seed;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, StoreKind};
use crate::service::TodoService;
use crate::store::{MemoryStore, MongoStore, StoreError, TodoStore};

pub use error::AppError;

pub fn app(service: TodoService) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn run(listener: TcpListener, store: Arc<dyn TodoStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(TodoService::new(store))).await
}

/// Open the backend selected by `config`.
pub async fn open_store(config: &Config) -> Result<Arc<dyn TodoStore>, StoreError> {
    match config.store {
        StoreKind::Memory => {
            info!("using in-memory store");
            let store: Arc<dyn TodoStore> = Arc::new(MemoryStore::new());
            Ok(store)
        }
        StoreKind::Mongo => {
            info!(addr = %config.mongo_addr, db = %config.mongo_db, "connecting to MongoDB");
            let store: Arc<dyn TodoStore> =
                Arc::new(MongoStore::connect(&config.mongo_uri(), &config.mongo_db).await?);
            Ok(store)
        }
    }
}
