//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use std::rc::Rc;

use task_store::{KeyValueStore, MemoryStorage, StorageError};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError(format!("{:?}", e)))?
            .ok_or_else(|| StorageError("localStorage is disabled".into()))
    }

    pub fn is_available() -> bool {
        Self::local_storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError(format!("{:?}", e)))
    }
}

/// localStorage when the browser allows it, otherwise a session-only map
pub fn browser_or_memory() -> Rc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        Rc::new(MemoryStorage::new())
    }
}
