//! Persistent Key-Value Storage
//!
//! The auth store mirrors its session into two entries. The browser backs
//! this with `localStorage`; tests and native builds use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Raw bearer token
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// JSON-serialized `User`
pub const USER_DATA_KEY: &str = "user_data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Storage unavailable: {0}")]
pub struct StorageError(pub String);

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
