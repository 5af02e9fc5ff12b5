use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use todo_core::{Created, NewTodo, Todo};

use crate::error::AppError;
use crate::service::TodoService;

pub async fn list_todos(
    State(service): State<TodoService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Todo>>, AppError> {
    service.list_todos(&params).await.map(Json)
}

pub async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    service.get_todo(&id).await.map(Json)
}

pub async fn create_todo(
    State(service): State<TodoService>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let id = service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_todo(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
