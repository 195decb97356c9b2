//! Repository Layer
//!
//! Data access abstractions and the SQLite implementation.

mod db;
mod todo_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::init_db;
pub use todo_repo::TodoRepository;
pub use traits::{Repository, StatusFilteredRepository};
