//! Todo List Component
//!
//! Renders the todos in order, or an empty-state message.

use leptos::prelude::*;

use super::TodoRow;
use crate::context::use_app_context;

const EMPTY_MESSAGE: &str = "Nothing here yet. Add something new?";

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || ctx.has_todos()
            fallback=|| view! {
                <div class="todo-empty">
                    <p>{EMPTY_MESSAGE}</p>
                </div>
            }
        >
            <div class="todo-list">
                // Keyed on completion too, so a toggled row is rebuilt
                <For
                    each=move || ctx.todos()
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </div>
        </Show>
    }
}
