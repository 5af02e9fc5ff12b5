//! Query-parameter filtering for the todo list.
//!
//! # Design
//! `TodoQuery::from_params` is the only place request parameters are
//! interpreted. It validates them and produces a typed query; `predicate`
//! turns that into a backend-neutral `Predicate` tree. Storage backends
//! either evaluate the tree directly (`Predicate::matches`) or translate it
//! into their own filter language. Conditions only ever combine with AND.
//!
//! Result ordering is never derived from parameters; lists come back in the
//! storage default order.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::types::{Todo, TodoStatus};

pub const OWNER_KEY: &str = "owner";
pub const STATUS_KEY: &str = "status";

/// A filterable field of a stored todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Owner,
    Status,
    Body,
    Category,
}

impl Field {
    /// Name of the field in stored documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Owner => "owner",
            Field::Status => "status",
            Field::Body => "body",
            Field::Category => "category",
        }
    }
}

/// The right-hand side of an equality condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
}

/// Boolean condition selecting stored todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every record.
    All,
    Eq(Field, Value),
    /// Case-insensitive substring match. The pattern is literal text, not a
    /// regular expression.
    MatchesCi(Field, String),
    And(Vec<Predicate>),
}

impl Predicate {
    /// Conjunction of `conditions`, collapsing to `All` when there are none.
    pub fn and(conditions: Vec<Predicate>) -> Self {
        if conditions.is_empty() {
            Predicate::All
        } else {
            Predicate::And(conditions)
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Eq(Field::Status, Value::Bool(expected)) => todo.status == *expected,
            Predicate::Eq(field, Value::Text(expected)) => {
                text_of(todo, *field).is_some_and(|actual| actual == expected)
            }
            Predicate::Eq(_, Value::Bool(_)) => false,
            Predicate::MatchesCi(field, pattern) => text_of(todo, *field)
                .is_some_and(|actual| actual.to_lowercase().contains(&pattern.to_lowercase())),
            Predicate::And(conditions) => conditions.iter().all(|c| c.matches(todo)),
        }
    }
}

fn text_of(todo: &Todo, field: Field) -> Option<&str> {
    match field {
        Field::Owner => Some(&todo.owner),
        Field::Body => Some(&todo.body),
        Field::Category => Some(&todo.category),
        Field::Status => None,
    }
}

/// Validated list filter.
///
/// Also the query-string shape `TodoClient` sends, so absent fields are left
/// out of the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl TodoQuery {
    /// Interpret raw query parameters.
    ///
    /// A parameter counts as present even with an empty value. When a key
    /// repeats, its first value is used. Keys other than `owner` and `status`
    /// are ignored.
    pub fn from_params<'a, I>(params: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut owner = None;
        let mut status = None;
        for (key, value) in params {
            match key {
                OWNER_KEY if owner.is_none() => owner = Some(value),
                STATUS_KEY if status.is_none() => status = Some(value),
                _ => {}
            }
        }

        let owner = match owner {
            Some("") => return Err(FilterError::EmptyOwner),
            other => other.map(str::to_string),
        };
        let status = status.map(str::parse::<TodoStatus>).transpose()?;

        Ok(Self { owner, status })
    }

    pub fn predicate(&self) -> Predicate {
        let mut conditions = Vec::new();
        if let Some(owner) = &self.owner {
            conditions.push(Predicate::MatchesCi(Field::Owner, owner.clone()));
        }
        if let Some(status) = self.status {
            conditions.push(Predicate::Eq(Field::Status, Value::Bool(status.as_bool())));
        }
        Predicate::and(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TodoId;

    fn todo(owner: &str, status: bool) -> Todo {
        Todo {
            id: TodoId::new(),
            owner: owner.to_string(),
            status,
            body: "Lorem ipsum".to_string(),
            category: "video games".to_string(),
        }
    }

    fn seed() -> Vec<Todo> {
        vec![
            todo("Fry", true),
            todo("Egg", true),
            todo("Watson", false),
            todo("Egg", false),
        ]
    }

    fn select<'a>(todos: &'a [Todo], params: &[(&str, &str)]) -> Vec<&'a Todo> {
        let predicate = TodoQuery::from_params(params.iter().copied()).unwrap().predicate();
        todos.iter().filter(|t| predicate.matches(t)).collect()
    }

    #[test]
    fn no_params_is_identity() {
        let query = TodoQuery::from_params(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(query, TodoQuery::default());
        assert_eq!(query.predicate(), Predicate::All);
        assert_eq!(select(&seed(), &[]).len(), 4);
    }

    #[test]
    fn owner_builds_case_insensitive_match() {
        let query = TodoQuery::from_params([("owner", "fry")]).unwrap();
        assert_eq!(
            query.predicate(),
            Predicate::And(vec![Predicate::MatchesCi(Field::Owner, "fry".to_string())])
        );
    }

    #[test]
    fn owner_matches_substrings_ignoring_case() {
        let todos = seed();
        let found = select(&todos, &[("owner", "fry")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].owner, "Fry");

        let found = select(&todos, &[("owner", "AT")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].owner, "Watson");
    }

    #[test]
    fn owner_pattern_is_literal() {
        let todos = vec![todo("a.c", true), todo("abc", true)];
        let found = select(&todos, &[("owner", "a.c")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].owner, "a.c");
    }

    #[test]
    fn empty_owner_is_rejected() {
        assert_eq!(TodoQuery::from_params([("owner", "")]), Err(FilterError::EmptyOwner));
    }

    #[test]
    fn status_complete_selects_two() {
        let todos = seed();
        let found = select(&todos, &[("status", "complete")]);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| t.status));
        assert_eq!(found[0].owner, "Fry");
        assert_eq!(found[1].owner, "Egg");
    }

    #[test]
    fn status_incomplete_selects_false() {
        let todos = seed();
        let found = select(&todos, &[("status", "Incomplete")]);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|t| !t.status));
    }

    #[test]
    fn invalid_status_is_rejected() {
        assert_eq!(
            TodoQuery::from_params([("status", "bad")]),
            Err(FilterError::InvalidStatus("bad".to_string()))
        );
        assert!(TodoQuery::from_params([("status", "")]).is_err());
    }

    #[test]
    fn owner_and_status_combine_conjunctively() {
        let todos = seed();
        let found = select(&todos, &[("owner", "egg"), ("status", "incomplete")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].owner, "Egg");
        assert!(!found[0].status);
    }

    #[test]
    fn unknown_params_are_ignored() {
        let query =
            TodoQuery::from_params([("body", "x"), ("limit", "3"), ("orderBy", "owner")]).unwrap();
        assert_eq!(query.predicate(), Predicate::All);
    }

    #[test]
    fn first_value_of_repeated_key_wins() {
        let query = TodoQuery::from_params([("status", "complete"), ("status", "bad")]).unwrap();
        assert_eq!(query.status, Some(TodoStatus::Complete));
    }

    #[test]
    fn empty_conjunction_matches_everything() {
        assert!(Predicate::And(Vec::new()).matches(&todo("Fry", true)));
        assert_eq!(Predicate::and(Vec::new()), Predicate::All);
    }

    #[test]
    fn equality_on_text_fields() {
        let p = Predicate::Eq(Field::Category, Value::Text("video games".to_string()));
        assert!(p.matches(&todo("Fry", true)));
        let p = Predicate::Eq(Field::Owner, Value::Text("fry".to_string()));
        assert!(!p.matches(&todo("Fry", true)));
    }

    #[test]
    fn mismatched_value_types_never_match() {
        assert!(!Predicate::Eq(Field::Owner, Value::Bool(true)).matches(&todo("Fry", true)));
        assert!(!Predicate::MatchesCi(Field::Status, "true".to_string()).matches(&todo("Fry", true)));
    }

    #[test]
    fn query_serializes_only_present_fields() {
        let query = TodoQuery {
            owner: Some("Fry".to_string()),
            status: None,
        };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "owner=Fry");
        let query = TodoQuery {
            owner: None,
            status: Some(TodoStatus::Incomplete),
        };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "status=incomplete");
    }
}
