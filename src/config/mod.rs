//! Configuration: TOML file under the platform config dir, CLI overrides on top.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CartConfig, CatalogConfig, Config, LoggingConfig, UiConfig};
