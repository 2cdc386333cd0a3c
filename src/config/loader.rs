use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/shopterm/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shopterm").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - Otherwise the file is parsed as TOML.
    ///
    /// Not validated here: callers apply CLI overrides first, then call
    /// [`Config::validate`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog endpoint is an http(s) URL
    /// - Timeouts and tick rate are non-zero
    /// - The log level is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.catalog.endpoint;
        let url = Url::parse(endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Catalog endpoint '{}' is not a valid URL: {}", endpoint, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Catalog endpoint '{}' must use http or https, not '{}'",
                    endpoint,
                    url.scheme()
                ),
            });
        }

        if self.catalog.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.catalog.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.connect_timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.level must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
