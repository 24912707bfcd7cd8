//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;

use catalog_core::config::{CatalogConfig, DatabaseConfig};
use catalog_database::{DatabasePool, ItemRepository};
use catalog_entity::CatalogRow;
use catalog_service::{CatalogBrowser, HierarchyResolver};

/// Test catalog backed by a private in-memory SQLite database
pub struct TestCatalog {
    /// Item repository for direct writes and stats
    pub items: Arc<ItemRepository>,
}

impl TestCatalog {
    /// Create an empty catalog
    pub async fn new() -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory catalog");
        Self {
            items: Arc::new(ItemRepository::new(db.into_pool())),
        }
    }

    /// Create a catalog holding `rows`
    pub async fn with_rows(rows: &[CatalogRow]) -> Self {
        let catalog = Self::new().await;
        catalog
            .items
            .upsert_many(rows)
            .await
            .expect("Failed to insert rows");
        catalog
    }

    /// Resolver over this catalog
    pub fn resolver(&self) -> HierarchyResolver {
        HierarchyResolver::new(self.items.clone())
    }

    /// Browser over this catalog rooted at `root`
    pub fn browser(&self, root: &str) -> CatalogBrowser {
        let config = CatalogConfig {
            root_path: root.to_string(),
            ..CatalogConfig::default()
        };
        CatalogBrowser::new(self.items.clone(), &config)
    }
}

/// Database config for a file catalog inside `dir`
pub fn file_config(dir: &Path, seed: Option<&Path>) -> DatabaseConfig {
    DatabaseConfig {
        path: dir.join("MoviesData.db").display().to_string(),
        seed_path: seed.map(|p| p.display().to_string()),
        ..DatabaseConfig::default()
    }
}

/// The sample library used across tests
pub fn library() -> Vec<CatalogRow> {
    vec![
        CatalogRow::folder("root-69", "/69"),
        CatalogRow::file("heat", "/69/USER MARIO/Films/Heat (1995).mkv", 4_700_000_000),
        CatalogRow::file("ronin", "/69/USER MARIO/Films/Ronin.mkv", 3_100_000_000),
        CatalogRow::folder("films", "/69/USER MARIO/Films"),
        CatalogRow::file("s01e01", "/69/USER MARIO/Series/Dark/S01/E01.mkv", 900_000_000),
        CatalogRow::file("notes", "/69/USER MARIO/notes.txt", 120),
        CatalogRow::file("old", "/69/USER MARIO/Films/Old Movie.avi", 1).tombstoned(),
    ]
}
