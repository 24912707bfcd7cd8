//! Catalog browsing configuration.

use serde::{Deserialize, Serialize};

/// Settings for browsing the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory listed when no path is given.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Number of sample paths included in diagnostics.
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            sample_size: default_sample_size(),
        }
    }
}

fn default_root_path() -> String {
    "/".to_string()
}

fn default_sample_size() -> u32 {
    5
}
