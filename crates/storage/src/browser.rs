//! Browser backend over `window.localStorage`.

use web_sys::{Storage, window};

use crate::{KeyValueStore, StorageError, StorageResult};

/// `window.localStorage` handle.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Acquire the page's local storage.
    ///
    /// Fails when there is no window (workers) or storage is disabled
    /// (private browsing modes, blocked third-party frames).
    pub fn open() -> StorageResult<Self> {
        let window = window().ok_or_else(|| StorageError::unavailable("no window object"))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::unavailable(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| StorageError::unavailable("localStorage not supported"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::unavailable(format!("getItem({key}) failed: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::unavailable(format!("setItem({key}) failed: {e:?}")))
    }
}
