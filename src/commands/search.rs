//! Name search command.

use clap::Args;

use crate::output::{self, OutputFormat};
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring of the item name
    pub query: String,
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let browser = super::open_browser(config).await?;
    let hits = browser.search(&args.query).await?;
    output::print_entries(&hits, format);
    Ok(())
}
