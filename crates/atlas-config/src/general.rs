//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Raw,
}

fn default_start_path() -> String {
    "/".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Location the navigator opens at. The root path follows its redirect.
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// External page opened by the Documentation menu command. Empty disables it.
    #[serde(default)]
    pub documentation_url: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            start_path: default_start_path(),
            documentation_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.start_path, "/");
        assert!(config.documentation_url.is_empty());
    }
}
