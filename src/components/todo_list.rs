//! Todo List Component
//!
//! Renders the filtered todo list, or a placeholder when empty.
//! Owns the delete confirmation state for its rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DeleteTodoDialog, TodoRow};
use crate::context::AppContext;
use crate::models::Todo;

/// Empty results render the placeholder instead of a list
pub(crate) fn has_rows(todos: &[Todo]) -> bool {
    !todos.is_empty()
}

/// Close the dialog, yielding the id to delete only on confirmation.
/// Cancel yields no id, so no request is ever issued for it.
pub(crate) fn close_dialog(pending: Option<Todo>, confirmed: bool) -> Option<u32> {
    if confirmed {
        pending.map(|todo| todo.id)
    } else {
        None
    }
}

/// List of todos with per-row toggle and delete-with-confirmation
#[component]
pub fn TodoList(todos: ReadSignal<Vec<Todo>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // The todo awaiting delete confirmation, if any
    let (pending_delete, set_pending_delete) = signal::<Option<Todo>>(None);

    // Both dialog buttons funnel through the same transition; only a
    // confirmed close yields an id to delete.
    let close = move |confirmed: bool| {
        if let Some(id) = close_dialog(pending_delete.get_untracked(), confirmed) {
            spawn_local(async move {
                match commands::delete_todo(id).await {
                    Ok(()) => ctx.reload(),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[LIST] delete_todo({}) failed: {}", id, e).into(),
                        );
                    }
                }
            });
        }
        set_pending_delete.set(None);
    };

    let on_confirm = Callback::new(move |_| close(true));
    let on_cancel = Callback::new(move |_| close(false));

    view! {
        <Show
            when=move || has_rows(&todos.get())
            fallback=|| view! { <h1 class="empty-placeholder">"Not found"</h1> }
        >
            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    // Key on every field that can change so a status flip
                    // re-renders the row
                    key=|todo| (todo.id, todo.status, todo.body.clone())
                    children=move |todo| {
                        view! { <TodoRow todo=todo set_pending_delete=set_pending_delete /> }
                    }
                />
            </ul>
        </Show>

        {move || pending_delete.get().map(|todo| view! {
            <DeleteTodoDialog todo=todo on_confirm=on_confirm on_cancel=on_cancel />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_shows_placeholder() {
        assert!(!has_rows(&[]));
        assert!(has_rows(&[Todo {
            id: 1,
            body: "buy milk".to_string(),
            status: crate::models::TodoStatus::Pending,
        }]));
    }

    #[test]
    fn test_confirm_yields_the_pending_id() {
        let pending = Some(Todo {
            id: 7,
            body: "buy milk".to_string(),
            status: crate::models::TodoStatus::Pending,
        });
        assert_eq!(close_dialog(pending, true), Some(7));
    }

    #[test]
    fn test_cancel_issues_no_request() {
        let pending = Some(Todo {
            id: 7,
            body: "buy milk".to_string(),
            status: crate::models::TodoStatus::Pending,
        });
        assert_eq!(close_dialog(pending, false), None);
    }

    #[test]
    fn test_confirm_without_pending_todo_is_a_no_op() {
        assert_eq!(close_dialog(None, true), None);
    }
}
