//! Domain core for the todo service.
//!
//! # Overview
//! Holds everything about todos that does not need I/O: the record types,
//! identifier parsing, the list filter (query parameters to `Predicate`),
//! creation rules, and a host-does-IO API client that builds `HttpRequest`
//! values and parses `HttpResponse` values.
//!
//! # Design
//! - The server crate depends on this crate for its request semantics; the
//!   storage backends only ever see a `Predicate`, never raw parameters.
//! - `TodoClient` is stateless and holds only `base_url`. Each operation is
//!   split into `build_*` and `parse_*`, so the I/O boundary is explicit.
//! - `refine_todos` narrows a fetched list locally on fields the server does
//!   not filter by.

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod id;
pub mod local;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, FilterError, IdError, ValidationError};
pub use filter::{Field, Predicate, TodoQuery, Value};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use id::TodoId;
pub use local::{refine_todos, LocalFilter};
pub use types::{Created, NewTodo, Todo, TodoStatus};
