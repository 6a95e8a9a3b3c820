//! Configuration loading from files and environment variables

use crate::error::{Error, Result};
use config::{Config as ConfigLib, Environment, File};
use std::path::Path;

use super::Config;

/// Prefix of environment variables that override configuration values
pub(crate) const ENV_PREFIX: &str = "FIGREFS";

impl Config {
    /// Load configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Hardcoded defaults
    /// 2. Config file (only when a path is given and the file exists)
    /// 3. Environment variables (`FIGREFS_*`)
    ///
    /// Nested values use double underscores, e.g. `FIGREFS_SCAN__MAX_WORKERS=4`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigLib::builder();

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
