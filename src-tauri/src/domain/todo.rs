//! Todo Entity
//!
//! A unit of work item with a text body and a two-valued status.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Todo status
///
/// Closed enumeration; the wire and DB representation is the lowercase
/// name ("pending" / "completed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Completed => "completed",
        }
    }

    /// Parse the DB/wire representation. Unknown strings are rejected
    /// rather than defaulted, so a corrupt row surfaces as an error.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TodoStatus::Pending),
            "completed" => Some(TodoStatus::Completed),
            _ => None,
        }
    }

    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Pending => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Pending,
        }
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the database
    pub id: u32,
    /// Todo text content
    pub body: String,
    /// Two-valued status
    pub status: TodoStatus,
}

impl Todo {
    /// Create a new pending todo
    pub fn new(id: u32, body: String) -> Self {
        Self {
            id,
            body,
            status: TodoStatus::Pending,
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
