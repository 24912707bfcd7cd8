//! Catalog browsing facade used by the command line.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use catalog_core::config::CatalogConfig;
use catalog_core::error::AppError;
use catalog_database::ItemRepository;
use catalog_entity::{CatalogStats, DirectoryEntry};

use crate::hierarchy::HierarchyResolver;

/// Result of opening a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// The directory that was listed.
    pub path: String,
    /// Its children, folders first.
    pub entries: Vec<DirectoryEntry>,
    /// Catalog diagnostics, present only when `entries` is empty.
    pub diagnostics: Option<CatalogStats>,
}

/// Browses the SQLite catalog.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    /// Item repository, also used for diagnostics.
    items: Arc<ItemRepository>,
    /// Hierarchy resolver over `items`.
    resolver: HierarchyResolver,
    /// Directory opened when none is given.
    root_path: String,
    /// Number of sample paths in diagnostics.
    sample_size: u32,
}

impl CatalogBrowser {
    /// Creates a new browser.
    pub fn new(items: Arc<ItemRepository>, config: &CatalogConfig) -> Self {
        let resolver = HierarchyResolver::new(items.clone());
        Self {
            items,
            resolver,
            root_path: config.root_path.clone(),
            sample_size: config.sample_size,
        }
    }

    /// The directory opened when none is given.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &HierarchyResolver {
        &self.resolver
    }

    /// Lists `path` (or the configured root).
    ///
    /// An empty listing carries catalog diagnostics so that a mistyped
    /// root can be told apart from an empty catalog.
    pub async fn open(&self, path: Option<&str>) -> Result<Listing, AppError> {
        let path = path.unwrap_or(&self.root_path).to_string();
        let entries = self.resolver.list_children(&path).await?;

        let diagnostics = if entries.is_empty() {
            let stats = self.items.stats(self.sample_size).await?;
            info!(
                path = %path,
                total_items = stats.total_items,
                "Directory is empty"
            );
            Some(stats)
        } else {
            None
        };

        Ok(Listing {
            path,
            entries,
            diagnostics,
        })
    }

    /// Searches live rows by name. An empty query returns nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<DirectoryEntry>, AppError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.resolver.search(query).await
    }

    /// Row count, sample paths, and catalog version.
    pub async fn info(&self) -> Result<CatalogStats, AppError> {
        self.items.stats(self.sample_size).await
    }
}
