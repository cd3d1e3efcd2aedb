//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::key::StorageKey;

/// Errors that can occur while writing documents.
///
/// Read and parse failures are not errors: loading falls back to the default
/// value and logs a warning instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to create the data directory.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize a document.
    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        /// The document being serialized.
        key: StorageKey,
        /// The underlying serializer error.
        source: serde_json::Error,
    },

    /// Failed to write a document.
    #[error("Failed to write {key}: {source}")]
    Write {
        /// The document being written.
        key: StorageKey,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
