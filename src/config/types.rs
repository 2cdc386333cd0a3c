use std::path::PathBuf;

use serde::Deserialize;

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub cart: CartConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the product catalog is fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Product collection URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartConfig {
    /// Push cart screen edits back to the product list (default: true).
    #[serde(default = "default_sync_to_list")]
    pub sync_to_list: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "shopterm=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/shopterm/shopterm.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_sync_to_list() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            sync_to_list: default_sync_to_list(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or the default location under the cache dir.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shopterm")
                .join("shopterm.log"),
        }
    }
}
