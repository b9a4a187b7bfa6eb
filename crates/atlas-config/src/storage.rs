//! Durable storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which key-value backend holds the favorites blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key under `data_dir`.
    #[default]
    File,
    /// In-process only; nothing survives the process.
    Memory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the directory the file backend writes to.
    ///
    /// Explicit `data_dir` wins, then `<platform data dir>/atlas`, then
    /// `.atlas` in the current directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".atlas"), |dir| dir.join("atlas"))
    }
}
