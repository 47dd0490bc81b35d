//! Persistent key-value storage used to hold credentials and preferences
//!
//! The browser build persists through `localStorage`; every other target (and
//! every test) uses [`MemoryStore`]. Callers only see the [`KeyValueStore`]
//! trait, so the session layer never depends on a real browser.

mod memory;
#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;

use crate::CoreResult;
use std::sync::Arc;

/// String key-value store with `localStorage` semantics
///
/// Values are stored verbatim. Removing a key that does not exist is not an
/// error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove `key` from the store
    fn remove(&self, key: &str) -> CoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        (**self).remove(key)
    }
}

/// Default store for the current target
///
/// `localStorage` in the browser, an empty in-memory store elsewhere.
pub fn default_store() -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(LocalStorageStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(MemoryStore::new())
    }
}
