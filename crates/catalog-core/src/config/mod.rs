//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod catalog;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::catalog::CatalogConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`MOVIE_CATALOG__DATABASE__PATH`).
pub const ENV_PREFIX: &str = "MOVIE_CATALOG";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + explicit file + environment).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Browsing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` (if present), the file at `path` (if
    /// present), and environment variables prefixed with `MOVIE_CATALOG`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.path.trim().is_empty() {
            return Err(AppError::configuration("database.path must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::configuration(
                "database.max_connections must be at least 1",
            ));
        }
        if !self.catalog.root_path.starts_with('/') {
            return Err(AppError::configuration(format!(
                "catalog.root_path '{}' must be absolute",
                self.catalog.root_path
            )));
        }
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(AppError::configuration(format!(
                "logging.format '{other}' must be 'json' or 'pretty'"
            ))),
        }
    }
}
