//! Todo Row Component
//!
//! A single row in the list: status checkbox, body, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::{Todo, TodoStatus};

/// Row class: completed rows get a darker fill
pub(crate) fn row_class(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Pending => "todo-row",
        TodoStatus::Completed => "todo-row completed",
    }
}

/// Body class: completed todos are struck through
pub(crate) fn body_class(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Pending => "todo-body",
        TodoStatus::Completed => "todo-body struck",
    }
}

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo, set_pending_delete: WriteSignal<Option<Todo>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let status = todo.status;
    let completed = status == TodoStatus::Completed;
    let body = todo.body.clone();
    let dialog_todo = todo.clone();

    view! {
        <li class=row_class(status)>
            // Checkbox
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| {
                    spawn_local(async move {
                        match commands::update_todo_status(id, status.toggled()).await {
                            Ok(_) => ctx.reload(),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("[ROW] update_todo_status({}) failed: {}", id, e).into(),
                                );
                            }
                        }
                    });
                }
            />

            // Body
            <span class=body_class(status)>{body}</span>

            // Delete button opens the confirmation dialog
            <button
                class="delete-btn"
                aria-label="Delete todo"
                on:click=move |_| set_pending_delete.set(Some(dialog_todo.clone()))
            >
                "×"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_styling_is_total_over_status() {
        assert_eq!(row_class(TodoStatus::Pending), "todo-row");
        assert_eq!(row_class(TodoStatus::Completed), "todo-row completed");
        assert_ne!(row_class(TodoStatus::Pending), row_class(TodoStatus::Completed));
    }

    #[test]
    fn test_body_styling_is_total_over_status() {
        assert_eq!(body_class(TodoStatus::Pending), "todo-body");
        assert_eq!(body_class(TodoStatus::Completed), "todo-body struck");
        assert_ne!(body_class(TodoStatus::Pending), body_class(TodoStatus::Completed));
    }
}
