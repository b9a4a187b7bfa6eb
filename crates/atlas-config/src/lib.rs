//! # atlas-config
//!
//! Layered configuration loading for Atlas using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATLAS_*` prefix, `__` as separator)
//! 2. Project-level `.atlas/config.toml`
//! 3. User-level `~/.config/atlas/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATLAS_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `ATLAS_GENERAL__START_PATH` -> `general.start_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use atlas_config::AtlasConfig;
//!
//! let config = AtlasConfig::load_with_dotenv().expect("config");
//! println!("favorites live in {}", config.storage.resolved_data_dir().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::{GeneralConfig, OutputFormat};
pub use storage::{StorageBackend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AtlasConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".atlas/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ATLAS_").split("__"))
    }

    /// Reject values that would make the navigator or the store unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.general.start_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "general.start_path".into(),
                reason: format!("'{}' must start with '/'", self.general.start_path),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atlas").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AtlasConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.general.default_format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let config: AtlasConfig = AtlasConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.general.start_path, "/");
    }

    #[test]
    fn relative_start_path_is_rejected() {
        let mut config = AtlasConfig::default();
        config.general.start_path = "about".into();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("general.start_path"));
    }
}
