//! Summary of the catalog contents used for diagnostics.

use serde::{Deserialize, Serialize};

/// Row count, a sample of stored paths, and the catalog version.
///
/// Shown when a listing comes back empty so that a wrong root path can be
/// told apart from an empty catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total number of rows, deleted ones included.
    pub total_items: u64,
    /// The first few stored paths, in store order.
    pub sample_paths: Vec<String>,
    /// Catalog version recorded by the sync process, if any.
    pub version: Option<String>,
}
