//! Filesystem backend: one file per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{KeyValueStore, StorageError, StorageResult};

const APP_DIR: &str = "stockroom";

/// Directory-backed key/value store.
///
/// Each key lives in `<dir>/<key>.json`. Keys are limited to ASCII
/// letters, digits, `-` and `_` so that distinct keys never share a file;
/// anything else is rejected with `StorageError::InvalidKey`. Writes go to a sibling temp file that
/// is renamed over the target, so a crash mid-write leaves the previous value.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Resolve the per-user data directory (`<data dir>/stockroom`).
    ///
    /// Falls back to `~/.local/share` when the platform has no data dir.
    pub fn default_dir() -> Option<PathBuf> {
        let base = dirs::data_dir().or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })?;
        Some(base.join(APP_DIR))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(&path, e))?;
        tracing::trace!(key, path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }
}

/// Keys become file stems verbatim, so only accept ones that need no escaping.
fn validate_key(key: &str) -> StorageResult<()> {
    let usable = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if usable {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
