//! Storage error model.

use std::path::PathBuf;

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a key/value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend cannot be reached (e.g. storage disabled in the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend cannot represent this key without colliding with another.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// A lock guarding in-process state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
