//! Todo Form Component
//!
//! Text input plus submit button for adding a todo.

use leptos::prelude::*;

use crate::context::use_app_context;

const PLACEHOLDER: &str = "What needs doing today?";

/// Form for adding todos. The pending text is only cleared when the add
/// went through, so blank input stays as typed.
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (pending, set_pending) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&pending.get_untracked()) {
            set_pending.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder=PLACEHOLDER
                prop:value=move || pending.get()
                on:input=move |ev| set_pending.set(event_target_value(&ev))
            />
            <button type="submit" class="todo-add-btn">"+"</button>
        </form>
    }
}
