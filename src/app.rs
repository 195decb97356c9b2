//! Todo App Frontend
//!
//! Main application component: status tabs, todo list, creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{NewTodoForm, StatusTabs, TodoList};
use crate::context::AppContext;
use crate::models::{StatusFilter, Todo};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (filter, set_filter) = signal(StatusFilter::All);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load todos when the filter or trigger changes. The backend is the
    // sole source of truth: mutations bump the trigger instead of patching
    // the list in place.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let statuses = filter.get().statuses();
        spawn_local(async move {
            match commands::get_all_todos(statuses).await {
                Ok(loaded) => set_todos.set(loaded),
                Err(e) => {
                    // Keep the previous view on failure
                    web_sys::console::error_1(
                        &format!("[APP] get_all_todos failed (trigger={}): {}", trigger, e).into(),
                    );
                }
            }
        });
    });

    view! {
        <main class="app-shell">
            <h1>"Todo App"</h1>

            <StatusTabs filter=filter set_filter=set_filter />

            <TodoList todos=todos />

            <NewTodoForm />

            <p class="todo-count">{move || format!("{} todos", todos.get().len())}</p>
        </main>
    }
}
