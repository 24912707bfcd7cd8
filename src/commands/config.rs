//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => println!("{:#?}", config),
        },
        ConfigCommand::Validate => {
            config.validate()?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Database", &config.database.path);
            output::print_kv(
                "Seed",
                config.database.seed_path.as_deref().unwrap_or("none"),
            );
            output::print_kv("Root", &config.catalog.root_path);
            output::print_kv("Log level", &config.logging.level);
        }
    }

    Ok(())
}
