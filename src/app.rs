//! Cozy Todo App
//!
//! Root component: loads the saved list once, then lays out the widget.

use leptos::logging::{error, log};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LoadError, TodoForm, TodoHeader, TodoList};
use crate::context::AppContext;
use crate::storage::{self, LocalStorageGateway};
use crate::store::TodoState;

const FOOTER: &str = "Ghibli Dog Todo • Stay Cozy";

#[component]
pub fn App() -> impl IntoView {
    let gateway = LocalStorageGateway::default();

    // Malformed saved data is reported, not replaced with the seed list
    let loaded = match storage::open(&gateway) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("[APP] Failed to load todos: {}", e);
            return view! { <LoadError message=e.to_string() /> }.into_any();
        }
    };
    log!("[APP] Loaded {} todos", loaded.len());

    let store = Store::new(TodoState::new(loaded));
    provide_context(AppContext::new(store, gateway));

    view! {
        <div class="app-layout">
            <div class="todo-card">
                <TodoHeader />
                <TodoForm />
                <TodoList />
                <footer class="todo-footer">
                    <span>{FOOTER}</span>
                </footer>
            </div>
        </div>
    }
    .into_any()
}
