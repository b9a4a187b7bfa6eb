//! File-backed key-value storage: one file per key under a root directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

const FILE_EXTENSION: &str = "json";

/// Stores each key at `<root>/<key>.json`.
///
/// The root directory is created on first write. Values are written to a
/// temporary file in the same directory and renamed into place, so a reader
/// never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let write_error = |reason: String| StoreError::Write {
            key: key.to_string(),
            reason,
        };

        fs::create_dir_all(&self.root)
            .map_err(|e| write_error(format!("mkdir {}: {e}", self.root.display())))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)
            .map_err(|e| write_error(format!("temp file in {}: {e}", self.root.display())))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| write_error(format!("write temp file: {e}")))?;
        tmp.persist(&path)
            .map_err(|e| write_error(format!("rename into {}: {}", path.display(), e.error)))?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::Write {
                key: key.to_string(),
                reason: format!("delete {}: {error}", path.display()),
            }),
        }
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
