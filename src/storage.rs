//! Todo Persistence
//!
//! The list is stored as one JSON array under a fixed key. Callers go
//! through `TodoGateway` so the browser store can be swapped for an
//! in-memory one.

use std::cell::RefCell;

use leptos::logging::error;

use crate::models::{seed_todos, Todo};

/// localStorage key holding the JSON-encoded list
pub const STORAGE_KEY: &str = "ghibli-todos";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Saved todos are malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to encode todos: {0}")]
    Encode(serde_json::Error),

    #[error("Failed to write todos: {0}")]
    Write(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Read/write boundary for the persisted list
pub trait TodoGateway {
    /// Previously saved list, or `None` if nothing was ever saved
    fn load(&self) -> StorageResult<Option<Vec<Todo>>>;

    /// Overwrite the saved list
    fn save(&self, todos: &[Todo]) -> StorageResult<()>;
}

/// Load the saved list, falling back to the seed list only when nothing
/// is stored. Unparsable content is returned as an error.
pub fn initialize(gateway: &impl TodoGateway) -> StorageResult<Vec<Todo>> {
    Ok(gateway.load()?.unwrap_or_else(seed_todos))
}

/// Load the list for a new session and write it back, so the seed list
/// is stored from the first launch on. A failed write is logged only.
pub fn open(gateway: &impl TodoGateway) -> StorageResult<Vec<Todo>> {
    let todos = initialize(gateway)?;
    if let Err(e) = gateway.save(&todos) {
        error!("[STORAGE] {}", e);
    }
    Ok(todos)
}

fn decode(raw: &str) -> StorageResult<Vec<Todo>> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode a stored value. An empty string counts as nothing stored.
fn stored(raw: Option<&str>) -> StorageResult<Option<Vec<Todo>>> {
    raw.filter(|raw| !raw.is_empty()).map(decode).transpose()
}

fn encode(todos: &[Todo]) -> StorageResult<String> {
    serde_json::to_string(todos).map_err(StorageError::Encode)
}

// ========================
// Browser localStorage
// ========================

#[derive(Debug, Clone, Copy)]
pub struct LocalStorageGateway {
    key: &'static str,
}

impl LocalStorageGateway {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl Default for LocalStorageGateway {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl TodoGateway for LocalStorageGateway {
    fn load(&self) -> StorageResult<Option<Vec<Todo>>> {
        let raw = self
            .storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;
        stored(raw.as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let raw = encode(todos)?;
        self.storage()?
            .set_item(self.key, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

// ========================
// In-memory store
// ========================

/// Holds the encoded JSON in memory, so it goes through the same
/// encode/decode path as the browser store.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    raw: RefCell<Option<String>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `raw` already stored, as if written by an earlier session
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl TodoGateway for MemoryGateway {
    fn load(&self) -> StorageResult<Option<Vec<Todo>>> {
        stored(self.raw.borrow().as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let raw = encode(todos)?;
        *self.raw.borrow_mut() = Some(raw);
        Ok(())
    }
}
