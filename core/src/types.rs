//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is the record as stored and as served; its id goes over the wire
//! under `_id`, matching the document the database holds. `NewTodo` is the
//! creation payload and owns the field rules a record must satisfy before it
//! is stored. Records are never updated once created, so there is no partial
//! update type.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, ValidationError};
use crate::id::TodoId;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    #[serde(default)]
    pub owner: String,
    pub status: bool,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: String,
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}

/// Response payload for a successful create.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Created {
    pub id: TodoId,
}

const OWNER_LEN: RangeInclusive<usize> = 2..=50;
const BODY_LEN: RangeInclusive<usize> = 5..=200;
const CATEGORY_LEN: RangeInclusive<usize> = 3..=30;

impl NewTodo {
    /// Check every text field against its accepted length, in declaration
    /// order, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len("owner", &self.owner, OWNER_LEN)?;
        check_len("body", &self.body, BODY_LEN)?;
        check_len("category", &self.category, CATEGORY_LEN)
    }

    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            owner: self.owner,
            status: self.status,
            body: self.body,
            category: self.category,
        }
    }
}

fn check_len(
    field: &'static str,
    value: &str,
    range: RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    if range.contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::Length {
            field,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// The two accepted spellings of a todo's `status` in query strings.
///
/// Parsing is case-insensitive; serialization is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Complete,
    Incomplete,
}

impl TodoStatus {
    pub fn as_bool(self) -> bool {
        matches!(self, TodoStatus::Complete)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Complete => "complete",
            TodoStatus::Incomplete => "incomplete",
        }
    }
}

impl FromStr for TodoStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("complete") {
            Ok(TodoStatus::Complete)
        } else if s.eq_ignore_ascii_case("incomplete") {
            Ok(TodoStatus::Incomplete)
        } else {
            Err(FilterError::InvalidStatus(s.to_string()))
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo() -> NewTodo {
        NewTodo {
            owner: "Fry".to_string(),
            status: true,
            body: "Lorem ipsum".to_string(),
            category: "video games".to_string(),
        }
    }

    #[test]
    fn todo_serializes_id_as_underscore_id() {
        let todo = new_todo().into_todo(TodoId::parse("588935f5c668650dc77df581").unwrap());
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["_id"], "588935f5c668650dc77df581");
        assert_eq!(json["owner"], "Fry");
        assert_eq!(json["status"], true);
        assert_eq!(json["body"], "Lorem ipsum");
        assert_eq!(json["category"], "video games");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn todo_text_fields_default_to_empty() {
        let todo: Todo =
            serde_json::from_str(r#"{"_id":"588935f5c668650dc77df581","status":false}"#).unwrap();
        assert!(todo.owner.is_empty());
        assert!(todo.body.is_empty());
        assert!(todo.category.is_empty());
    }

    #[test]
    fn new_todo_rejects_non_boolean_status() {
        let result: Result<NewTodo, _> = serde_json::from_str(
            r#"{"owner":"Fry","status":"complete","body":"Lorem ipsum","category":"games"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn valid_new_todo_passes() {
        assert_eq!(new_todo().validate(), Ok(()));
    }

    #[test]
    fn short_owner_is_rejected() {
        let input = NewTodo {
            owner: "F".to_string(),
            ..new_todo()
        };
        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length {
                field: "owner",
                min: 2,
                max: 50
            }
        );
        assert_eq!(err.to_string(), "Todo's owner must be between 2 and 50 characters long");
    }

    #[test]
    fn long_body_is_rejected() {
        let input = NewTodo {
            body: "x".repeat(201),
            ..new_todo()
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::Length { field: "body", .. })
        ));
    }

    #[test]
    fn category_bounds_are_inclusive() {
        let input = NewTodo {
            category: "abc".to_string(),
            ..new_todo()
        };
        assert!(input.validate().is_ok());
        let input = NewTodo {
            category: "x".repeat(30),
            ..new_todo()
        };
        assert!(input.validate().is_ok());
        let input = NewTodo {
            category: "x".repeat(31),
            ..new_todo()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let input = NewTodo {
            owner: "Zoë".to_string(),
            category: "çàé".to_string(),
            ..new_todo()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("complete".parse::<TodoStatus>(), Ok(TodoStatus::Complete));
        assert_eq!("COMPLETE".parse::<TodoStatus>(), Ok(TodoStatus::Complete));
        assert_eq!("InComplete".parse::<TodoStatus>(), Ok(TodoStatus::Incomplete));
        assert_eq!(
            "bad".parse::<TodoStatus>(),
            Err(FilterError::InvalidStatus("bad".to_string()))
        );
        assert!("".parse::<TodoStatus>().is_err());
    }

    #[test]
    fn status_maps_to_boolean() {
        assert!(TodoStatus::Complete.as_bool());
        assert!(!TodoStatus::Incomplete.as_bool());
    }
}
