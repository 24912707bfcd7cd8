//! Directory listing command.

use clap::Args;

use crate::output::{self, OutputFormat};
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Directory to list (defaults to the configured root)
    pub path: Option<String>,
}

/// Execute the ls command
pub async fn execute(
    args: &LsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let browser = super::open_browser(config).await?;
    let listing = browser.open(args.path.as_deref()).await?;

    match format {
        OutputFormat::Json => output::print_json(&listing),
        OutputFormat::Table => {
            println!("{}", listing.path);
            output::print_entries(&listing.entries, format);
            if let Some(stats) = &listing.diagnostics {
                println!();
                output::print_stats(stats, format);
            }
        }
    }

    Ok(())
}
