//! Browser LocalStorage backend
//!
//! On native targets there is no LocalStorage: reads find nothing and writes
//! report `Unavailable`. Native frontends use `MemoryStore` instead.

use crate::persistence::{KeyValueStore, StoreError};

/// `window.localStorage`, if the page has one
pub struct LocalStorage {
    #[cfg(target_arch = "wasm32")]
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the page's LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, progress will not be saved");
        }
        Self { storage }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Self {
        Self {}
    }

    /// Whether a backing storage was found
    #[cfg(target_arch = "wasm32")]
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_available(&self) -> bool {
        false
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_local_storage_is_unavailable() {
        let mut storage = LocalStorage::open();
        assert!(!storage.is_available());
        assert_eq!(storage.get("points"), None);
        assert_eq!(storage.set("points", "1"), Err(StoreError::Unavailable));
    }
}
