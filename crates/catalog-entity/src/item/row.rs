//! Catalog row model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::ItemKind;

/// One row of the `items` table: a real file or folder known to the catalog.
///
/// Rows are written only by the sync process; the catalog reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CatalogRow {
    /// Stable identifier assigned by the cloud drive.
    pub id: String,
    /// Leaf display name.
    pub name: String,
    /// Absolute slash-delimited path without a trailing slash.
    pub path: String,
    /// Size in bytes (0 for folders).
    pub size: i64,
    /// File or folder.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Remote modification timestamp, as delivered by the drive.
    pub last_modified: Option<String>,
    /// Tombstone flag; non-zero rows are hidden from search.
    pub deleted: i64,
    /// When the sync process last wrote this row (epoch millis).
    pub synced_at: Option<i64>,
}

impl CatalogRow {
    /// Build a live row with empty provenance metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        size: i64,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            size,
            kind,
            last_modified: None,
            deleted: 0,
            synced_at: None,
        }
    }

    /// Build a live file row whose name is the last path segment.
    pub fn file(id: impl Into<String>, path: &str, size: i64) -> Self {
        Self::new(id, leaf_name(path), path, size, ItemKind::File)
    }

    /// Build a live folder row whose name is the last path segment.
    pub fn folder(id: impl Into<String>, path: &str) -> Self {
        Self::new(id, leaf_name(path), path, 0, ItemKind::Folder)
    }

    /// Mark the row as deleted.
    pub fn tombstoned(mut self) -> Self {
        self.deleted = 1;
        self
    }

    /// Check if the row carries the tombstone flag.
    pub fn is_deleted(&self) -> bool {
        self.deleted != 0
    }
}

fn leaf_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
