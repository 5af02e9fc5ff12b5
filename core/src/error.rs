//! Error types shared by the todo service and its client.
//!
//! # Design
//! Request-time input problems (`IdError`, `FilterError`, `ValidationError`)
//! are separate enums so the server can map each family to its own status
//! code. `ApiError` is what `TodoClient` parse methods return; `NotFound` and
//! `BadRequest` get dedicated variants because callers routinely branch on
//! them, everything else lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// A path parameter that does not parse as a storage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("`{0}` is not a 24 character hexadecimal object id")]
    Malformed(String),
}

/// A query parameter rejected while building a list predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Todo's owner must have some value")]
    EmptyOwner,

    #[error("Status parameter must be either complete or incomplete")]
    InvalidStatus(String),
}

/// A creation payload with a field outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Todo's {field} must be between {min} and {max} characters long")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400; `message` is taken from the error body when
    /// it has one.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
