//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            let mut database = config.database.clone();
            database.run_migrations = false;
            let db = DatabasePool::open(&database).await?;

            println!("Running database migrations...");
            catalog_database::migration::run_migrations(db.pool()).await?;
            db.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
