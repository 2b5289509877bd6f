//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing id lists.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store.
    #[error("Failed to open store at {path}: {source}")]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read or write a key's file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored value is not a JSON list of ids.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Key can't be used as a storage name.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Another thread panicked while holding the store.
    #[error("Store lock poisoned")]
    Poisoned,
}
