//! coordavg CLI entry point

use anyhow::{Context, Result};
use coordavg::config::cli::Cli;
use coordavg::config::{toml, validator};

fn setup_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // RUST_LOG, when set, takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = toml::load_config(&cli).context("Failed to load configuration")?;
    setup_logging(config.runtime.debug);
    log::debug!("Configuration: {}", config);

    validator::validate_config(&config).context("Configuration validation failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    coordavg::run(&config, &mut out)?;

    Ok(())
}
