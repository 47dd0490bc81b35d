//! Browser `localStorage` backed store

use super::KeyValueStore;
use crate::{CoreError, CoreResult};
use gloo::storage::{LocalStorage, Storage};

/// Store backed by `window.localStorage`
///
/// Values are read and written raw, not JSON-encoded, so keys written by other
/// scripts on the same origin stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| CoreError::storage_error(format!("get {key}: {err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| CoreError::storage_error(format!("set {key}: {err:?}")))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| CoreError::storage_error(format!("remove {key}: {err:?}")))
    }
}
