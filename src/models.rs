//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    /// The opposite status, used by the checkbox toggle
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Pending => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Pending,
        }
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub body: String,
    pub status: TodoStatus,
}

/// Which status subset the list view is restricted to.
///
/// Closed enumeration instead of an open status list, so an invalid
/// filter cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Tab order in the UI
    pub const TABS: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Completed,
    ];

    /// Status subset passed to `get_all_todos`
    pub fn statuses(self) -> &'static [TodoStatus] {
        match self {
            StatusFilter::All => &[TodoStatus::Pending, TodoStatus::Completed],
            StatusFilter::Pending => &[TodoStatus::Pending],
            StatusFilter::Completed => &[TodoStatus::Completed],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggle_round_trip() {
        assert_eq!(TodoStatus::Pending.toggled(), TodoStatus::Completed);
        assert_eq!(TodoStatus::Completed.toggled(), TodoStatus::Pending);
        assert_eq!(TodoStatus::Pending.toggled().toggled(), TodoStatus::Pending);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&TodoStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_filter_status_subsets() {
        assert_eq!(
            StatusFilter::All.statuses(),
            &[TodoStatus::Pending, TodoStatus::Completed]
        );
        assert_eq!(StatusFilter::Pending.statuses(), &[TodoStatus::Pending]);
        assert_eq!(StatusFilter::Completed.statuses(), &[TodoStatus::Completed]);
    }

    #[test]
    fn test_todo_deserialization() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"body":"buy milk","status":"pending"}"#).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.body, "buy milk");
        assert_eq!(todo.status, TodoStatus::Pending);
    }
}
