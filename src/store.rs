//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every change
//! to the list goes through `commit`, which saves before returning.

use leptos::logging::{error, log};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::storage::TodoGateway;
use crate::todos;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in display order, newest first
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Current list (tracked)
pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.todos().get()
}

/// Number of todos (tracked)
pub fn store_len(store: &TodoStore) -> usize {
    store.todos().read().len()
}

/// Number of completed todos (tracked)
pub fn store_completed_count(store: &TodoStore) -> usize {
    todos::completed_count(&store.todos().read())
}

/// Replace the list and save it through `gateway`.
///
/// A failed save is logged; the in-memory list is still updated.
pub fn commit(store: &TodoStore, gateway: &impl TodoGateway, op: &str, next: Vec<Todo>) {
    log!("[STORE] {} -> {} todos", op, next.len());
    if let Err(e) = gateway.save(&next) {
        error!("[STORAGE] {}", e);
    }
    *store.todos().write() = next;
}

/// Run a transition on the current list and commit it if anything changed.
/// Returns whether a commit happened.
fn apply(
    store: &TodoStore,
    gateway: &impl TodoGateway,
    op: &str,
    transition: impl FnOnce(&[Todo]) -> Vec<Todo>,
) -> bool {
    let current = store.todos().get_untracked();
    let next = transition(&current);
    if next == current {
        return false;
    }
    commit(store, gateway, op, next);
    true
}

pub fn add_todo(
    store: &TodoStore,
    gateway: &impl TodoGateway,
    raw_text: &str,
    next_id: impl FnOnce() -> u64,
) -> bool {
    apply(store, gateway, "add", |list| todos::add(list, raw_text, next_id))
}

pub fn toggle_todo(store: &TodoStore, gateway: &impl TodoGateway, id: u64) -> bool {
    apply(store, gateway, "toggle", |list| todos::toggle(list, id))
}

pub fn delete_todo(store: &TodoStore, gateway: &impl TodoGateway, id: u64) -> bool {
    apply(store, gateway, "delete", |list| todos::delete(list, id))
}
