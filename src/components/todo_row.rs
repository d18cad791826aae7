//! Todo Row Component
//!
//! A single todo in the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Todo;

/// A single todo row: toggle button, text, delete button
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <button
                class=if completed { "todo-toggle checked" } else { "todo-toggle" }
                on:click=move |_| ctx.toggle(id)
            >
                {completed.then_some("✓")}
            </button>

            <span class=if completed { "todo-text done" } else { "todo-text" }>{todo.text}</span>

            <button class="todo-delete-btn" on:click=move |_| ctx.delete(id)>"🗑"</button>
        </div>
    }
}
