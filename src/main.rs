use anyhow::Context;
use clap::Parser;

use shopterm::cli::Cli;
use shopterm::config::Config;
use shopterm::logging::init_logging;
use shopterm::ui::runtime;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("shopterm: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    let log_path = init_logging(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        log_file = %log_path.display(),
        "Starting shopterm"
    );

    runtime::run(&config)
}
