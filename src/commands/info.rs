//! Catalog statistics command.

use crate::output::{self, OutputFormat};
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;

/// Execute the info command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let browser = super::open_browser(config).await?;
    let stats = browser.info().await?;
    if format == OutputFormat::Table {
        output::print_kv("Database", &config.database.path);
    }
    output::print_stats(&stats, format);
    Ok(())
}
