//! UI Components
//!
//! Reusable Leptos components.

mod delete_todo_dialog;
mod new_todo_form;
mod status_tabs;
mod todo_list;
mod todo_row;

pub use delete_todo_dialog::DeleteTodoDialog;
pub use new_todo_form::NewTodoForm;
pub use status_tabs::StatusTabs;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
