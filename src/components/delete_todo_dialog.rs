//! Delete Todo Dialog Component
//!
//! Modal confirmation guarding the destructive delete.

use leptos::prelude::*;

use crate::models::Todo;

/// Modal delete confirmation
///
/// Confirm runs `on_confirm`; Cancel and the overlay run `on_cancel`
/// without issuing any request.
#[component]
pub fn DeleteTodoDialog(
    todo: Todo,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay" on:click=move |_| on_cancel.run(())></div>
        <div class="dialog" role="dialog" aria-modal="true">
            <h2 class="dialog-title">"Delete Todo"</h2>
            <p class="dialog-description">
                "Are you sure you want to delete "
                <span class="dialog-todo-body">{todo.body.clone()}</span>
                "?"
            </p>
            <div class="dialog-actions">
                <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                    "Confirm"
                </button>
                <button class="cancel-btn" aria-label="Close" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
