//! `stockroom-storage` — key/value persistence backends.
//!
//! The inventory persists its whole product list under a single string key.
//! Backends only move opaque strings; they never look inside the payload.

pub mod error;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod browser;

use std::sync::Arc;

pub use error::{StorageError, StorageResult};
pub use memory::InMemoryKeyValueStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileKeyValueStore;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// String key/value store (the shape of browser `localStorage`).
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<S> KeyValueStore for &S
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
