//! Catalog database configuration.

use serde::{Deserialize, Serialize};

/// SQLite catalog database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite catalog file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Bundled catalog copied into `path` the first time the catalog is opened.
    #[serde(default = "default_seed_path")]
    pub seed_path: Option<String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whether to apply schema migrations on open.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            seed_path: default_seed_path(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            run_migrations: true,
        }
    }
}

fn default_path() -> String {
    "data/MoviesData.db".to_string()
}

fn default_seed_path() -> Option<String> {
    Some("assets/DB.db".to_string())
}

fn default_max_connections() -> u32 {
    4
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
