//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber. `RUST_LOG` wins over `config.level`.
///
/// Returns the path logs are written to.
pub fn init_logging(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LoggingError::OpenFile {
            path: path.clone(),
            source: e,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| LoggingError::OpenFile {
            path: path.clone(),
            source: e,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(path)
}
