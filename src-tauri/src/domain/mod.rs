//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has no external dependencies beyond serde and thiserror.

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{Todo, TodoStatus};
