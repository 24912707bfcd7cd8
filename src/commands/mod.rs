//! CLI command definitions and dispatch.

pub mod config;
pub mod info;
pub mod ls;
pub mod migrate;
pub mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::{DatabasePool, ItemRepository};
use catalog_service::CatalogBrowser;

/// Movie catalog: browse and search the mirrored drive catalog
#[derive(Debug, Parser)]
#[command(name = "movie-catalog", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the children of a directory
    Ls(ls::LsArgs),
    /// Search items by name
    Search(search::SearchArgs),
    /// Show catalog statistics
    Info,
    /// Configuration management
    Config(config::ConfigArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Ls(args) => ls::execute(args, &config, self.format).await,
            Commands::Search(args) => search::execute(args, &config, self.format).await,
            Commands::Info => info::execute(&config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, &self.config, self.format),
            Commands::Migrate(args) => migrate::execute(args, &config).await,
        }
    }
}

/// Helper: open the catalog database and build a browser over it
pub async fn open_browser(config: &AppConfig) -> Result<CatalogBrowser, AppError> {
    let db = DatabasePool::open(&config.database).await?;
    let items = Arc::new(ItemRepository::new(db.into_pool()));
    Ok(CatalogBrowser::new(items, &config.catalog))
}
