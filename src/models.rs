//! Frontend Models
//!
//! The todo record and the list used on first launch.

use serde::{Deserialize, Serialize};

/// A single task. Field names are the persisted JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Seed list shown when nothing has been saved yet
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            text: "Walk the dog 🐾".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            text: "Binge-watch Ghibli films 🎬".to_string(),
            completed: true,
        },
    ]
}
