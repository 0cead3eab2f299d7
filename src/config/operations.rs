//! Config loading, validation, and serialization.

use super::model::ShellConfig;
use crate::error::{Error, Result};
use std::path::Path;

impl ShellConfig {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(ShellConfig)` - Successfully loaded and validated config
    /// * `Err(Error::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ShellConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `shell` and `shell_flag` must be non-empty
    /// - `read_chunk_size` must be positive
    /// - `default_timeout_secs`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            return Err(Error::Config(
                "config validation failed: shell must be non-empty".to_string(),
            ));
        }

        if self.shell_flag.trim().is_empty() {
            return Err(Error::Config(
                "config validation failed: shell_flag must be non-empty".to_string(),
            ));
        }

        if self.read_chunk_size == 0 {
            return Err(Error::Config(
                "config validation failed: read_chunk_size must be greater than 0".to_string(),
            ));
        }

        if self.default_timeout_secs == Some(0) {
            return Err(Error::Config(
                "config validation failed: default_timeout_secs must be greater than 0"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
