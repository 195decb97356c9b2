//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the repository.

mod todo_cmd;

pub use todo_cmd::*;
