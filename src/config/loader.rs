use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Longest array the chart can lay out sensibly.
pub const MAX_ARRAY_LEN: usize = 256;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/sortviz/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("sortviz").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Unknown algorithm names fail here, not when a run starts.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The value range `[min_value, max_value)` is not empty
    /// - The array length is at most [`MAX_ARRAY_LEN`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let array = &self.array;
        if array.max_value <= array.min_value {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_value ({}) must be greater than min_value ({})",
                    array.max_value, array.min_value
                ),
            });
        }

        if array.length > MAX_ARRAY_LEN {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "array length {} exceeds the maximum of {}",
                    array.length, MAX_ARRAY_LEN
                ),
            });
        }

        Ok(())
    }
}
