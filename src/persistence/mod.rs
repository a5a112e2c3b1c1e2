//! Key-value persistence
//!
//! The game only stores one integer (the best score), so the storage
//! collaborator is a plain string key-value interface:
//! - `MemoryStore` for tests and headless runs
//! - `JsonFileStore` for native builds
//! - `LocalStore` (LocalStorage) for the web build

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStore;

/// String key-value storage
///
/// Writes are fire-and-forget: backends log failures instead of returning them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }
}
