//! In-memory key-value store

use super::KeyValueStore;
use crate::{CoreError, CoreResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_default()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every stored entry
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .read()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CoreError::storage_error("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::storage_error("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::storage_error("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
