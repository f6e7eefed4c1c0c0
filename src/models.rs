//! Frontend Models
//!
//! Data structures matching the backend's wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identity. The backing store may hand out numeric or
/// string ids, so both are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n)
    }
}

/// Todo data structure (matches backend)
///
/// `id` is absent until the server persists the todo. `is_editable` is a
/// UI-only flag; servers that never stored it send payloads without it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "isEditable", default)]
    pub is_editable: bool,
}

impl Todo {
    /// A not-yet-persisted todo as produced by the add-input.
    pub fn draft(title: String) -> Self {
        Self {
            id: None,
            title,
            completed: false,
            is_editable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_serializes_without_id() {
        let json = serde_json::to_string(&Todo::draft("buy milk".into())).unwrap();
        assert_eq!(
            json,
            r#"{"title":"buy milk","completed":false,"isEditable":false}"#
        );
    }

    #[test]
    fn accepts_numeric_and_string_ids() {
        let a: Todo = serde_json::from_str(r#"{"id":3,"title":"a","completed":true}"#).unwrap();
        assert_eq!(a.id, Some(TodoId::Number(3)));

        let b: Todo = serde_json::from_str(r#"{"id":"a1","title":"b","completed":false}"#).unwrap();
        assert_eq!(b.id, Some(TodoId::Text("a1".into())));
    }

    #[test]
    fn missing_editable_flag_defaults_to_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"title":"a","completed":false}"#).unwrap();
        assert!(!todo.is_editable);
    }

    #[test]
    fn id_formats_into_url_path() {
        assert_eq!(TodoId::Number(42).to_string(), "42");
        assert_eq!(TodoId::Text("a1b".into()).to_string(), "a1b");
    }
}
