//! Movie catalog browser: command-line entry point.
//!
//! Loads configuration, initializes logging, opens the catalog database,
//! and dispatches the requested command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use catalog_core::config::{AppConfig, LoggingConfig};
use catalog_core::error::AppError;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(config).await {
        tracing::error!(error = %e, "Command failed");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    let config = AppConfig::load(config_path)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
