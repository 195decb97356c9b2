//! New Todo Form Component
//!
//! Form for creating new todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

/// Form for creating a new todo
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (body, set_body) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = body.get();
        if text.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match commands::create_todo(&text).await {
                Ok(_) => {
                    set_body.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[FORM] create_todo failed: {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add todo..."
                prop:value=move || body.get()
                on:input=move |ev| set_body.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
