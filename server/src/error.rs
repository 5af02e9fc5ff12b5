//! HTTP-facing error type.
//!
//! Every failure a request can hit ends up as an `AppError`, which renders as
//! a status code plus a JSON `{code, message}` body. Client errors carry
//! their message verbatim; storage failures are logged with their source and
//! reported generically.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{FilterError, IdError, ValidationError};

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The requested todo id wasn't a legal Mongo Object ID.")]
    InvalidId(#[from] IdError),

    #[error("The requested todo was not found.")]
    NotFound,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("An internal error occurred")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::Filter(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code for clients that branch on error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidId(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Filter(_) | AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Store(source) = &self {
            tracing::error!(%status, error = %source, "storage failure");
        }

        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
