//! Client-side refinement of an already fetched todo list.
//!
//! The server only filters on `owner` and `status`. Callers that want to
//! narrow further by `category` or `body` while the user types do it locally
//! over the last server response instead of issuing a request per keystroke.

use crate::types::{Todo, TodoStatus};

/// Local narrowing criteria. Empty strings count as "no criterion".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalFilter {
    pub category: Option<String>,
    pub body: Option<String>,
    pub status: Option<TodoStatus>,
}

/// Keep the todos that satisfy every criterion in `filter`, preserving order.
///
/// `category` and `body` are case-insensitive substring matches; `status` is
/// exact.
pub fn refine_todos(todos: &[Todo], filter: &LocalFilter) -> Vec<Todo> {
    let category = needle(filter.category.as_deref());
    let body = needle(filter.body.as_deref());

    todos
        .iter()
        .filter(|t| category.as_deref().map_or(true, |c| t.category.to_lowercase().contains(c)))
        .filter(|t| body.as_deref().map_or(true, |b| t.body.to_lowercase().contains(b)))
        .filter(|t| filter.status.map_or(true, |s| t.status == s.as_bool()))
        .cloned()
        .collect()
}

fn needle(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}
