//! JSON document store on the local filesystem.
//!
//! Each `StorageKey` maps to one file, `{prefix}_{key}.json`, inside a data
//! directory. Loads are forgiving: a missing, unreadable, or unparsable
//! document yields `None` (callers substitute the default) with a WARN log.
//! Writes are synchronous and report failure, but callers treat them as
//! best-effort.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use pavilion_shared::config::StorageSettings;

use crate::error::StoreError;
use crate::key::StorageKey;

/// A directory of JSON documents, one per storage key.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    prefix: String,
}

impl LocalStore {
    /// Creates a store over the given directory and key prefix.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// Creates a store from storage settings.
    #[must_use]
    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(settings.data_dir.clone(), settings.key_prefix.clone())
    }

    /// The data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file path backing a key.
    #[must_use]
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(format!("{}_{}.json", self.prefix, key))
    }

    /// Loads a document, or `None` when it is missing or unreadable.
    ///
    /// Failures other than a missing file are logged at WARN and swallowed;
    /// the caller falls back to a default value either way.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(%key, path = %path.display(), error = %e, "failed to read document");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%key, path = %path.display(), error = %e, "failed to parse document");
                None
            }
        }
    }

    /// Loads a document, falling back to `default`.
    #[must_use]
    pub fn load_or<T: DeserializeOwned>(&self, key: StorageKey, default: T) -> T {
        self.load(key).unwrap_or(default)
    }

    /// Loads a document, falling back to the result of `default`.
    #[must_use]
    pub fn load_or_else<T: DeserializeOwned>(
        &self,
        key: StorageKey,
        default: impl FnOnce() -> T,
    ) -> T {
        self.load(key).unwrap_or_else(default)
    }

    /// Writes a document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the data directory cannot be created or the
    /// document cannot be serialized or written.
    pub fn persist<T: Serialize>(&self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|source| StoreError::Serialize { key, source })?;

        fs::write(self.path_for(key), json).map_err(|source| StoreError::Write { key, source })
    }
}
