use std::collections::HashMap;
use std::sync::RwLock;

use crate::{KeyValueStore, StorageError, StorageResult};

/// In-memory key/value store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing value (e.g. state left by a previous session).
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = HashMap::new();
        map.insert(key.into(), value.into());
        Self {
            inner: RwLock::new(map),
        }
    }

    pub fn len(&self) -> StorageResult<usize> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("products").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = InMemoryKeyValueStore::with_entry("products", "[]");
        store.set("products", "[1]").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn poisoned_lock_is_reported_by_every_accessor() {
        let store = InMemoryKeyValueStore::with_entry("products", "[]");
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.write().unwrap();
            panic!("writer died holding the lock");
        }));

        assert!(matches!(store.len(), Err(StorageError::Poisoned)));
        assert!(matches!(store.is_empty(), Err(StorageError::Poisoned)));
        assert!(matches!(store.get("products"), Err(StorageError::Poisoned)));
        assert!(matches!(store.set("products", "[]"), Err(StorageError::Poisoned)));
    }
}
