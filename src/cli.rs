use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal storefront for the Fake Store demo catalog.
#[derive(Debug, Parser)]
#[command(name = "shopterm", version, about)]
pub struct Cli {
    /// Path to config file (default: <config_dir>/shopterm/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (RUST_LOG still takes precedence)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Do not push cart screen edits back to the product list
    #[arg(long)]
    pub no_cart_sync: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_cart_sync {
            config.cart.sync_to_list = false;
        }
    }
}
