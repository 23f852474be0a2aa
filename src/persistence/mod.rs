//! Session persistence
//!
//! Features:
//! - `KeyValueStore` port (LocalStorage on web, in-memory elsewhere)
//! - Plain string values under fixed keys
//! - Per-key fallback when stored data is missing or malformed
//!
//! Writes are best-effort: callers log failures and keep playing.

pub mod snapshot;

use std::collections::HashMap;

pub use snapshot::{Snapshot, keys};

/// Errors a storage backend can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is available (private mode, no window, ...)
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, security policy)
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// String key-value storage
pub trait KeyValueStore {
    /// Read a value, `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Delete a value (deleting a missing key is not an error)
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    /// Refuse every write (simulates a full or blocked storage)
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected(format!("{} is read-only", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected(format!("{} is read-only", key)));
        }
        self.entries.remove(key);
        Ok(())
    }
}
