//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Todo;
use crate::storage::LocalStorageGateway;
use crate::store::{self, TodoStore};
use crate::todos;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive todo list
    pub store: TodoStore,
    /// Where every change is written
    gateway: LocalStorageGateway,
}

impl AppContext {
    pub fn new(store: TodoStore, gateway: LocalStorageGateway) -> Self {
        Self { store, gateway }
    }

    pub fn todos(&self) -> Vec<Todo> {
        store::store_todos(&self.store)
    }

    pub fn completed_count(&self) -> usize {
        store::store_completed_count(&self.store)
    }

    pub fn total(&self) -> usize {
        store::store_len(&self.store)
    }

    pub fn has_todos(&self) -> bool {
        self.total() > 0
    }

    /// Add a todo from the input text. Returns false if the text was blank.
    pub fn add(&self, raw_text: &str) -> bool {
        store::add_todo(&self.store, &self.gateway, raw_text, todos::timestamp_id)
    }

    pub fn toggle(&self, id: u64) {
        store::toggle_todo(&self.store, &self.gateway, id);
    }

    pub fn delete(&self, id: u64) {
        store::delete_todo(&self.store, &self.gateway, id);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
