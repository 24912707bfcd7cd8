//! Directory entries produced by listings and searches.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::ItemKind;
use super::row::CatalogRow;

/// A child of a directory, or a search hit.
///
/// Entries are built per call and never persisted. A synthesized entry
/// stands for a folder that has descendants in the catalog but no row of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Row id, or a path-derived id for synthesized folders.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Absolute path.
    pub path: String,
    /// Size in bytes (0 for synthesized folders).
    pub size: i64,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Whether the entry was fabricated from deeper descendants.
    #[serde(default)]
    pub synthesized: bool,
}

impl DirectoryEntry {
    /// Build an entry from a real row, placed at `path`.
    pub fn from_row(row: &CatalogRow, path: impl Into<String>) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            path: path.into(),
            size: row.size,
            kind: row.kind,
            synthesized: false,
        }
    }

    /// Build an implicit folder for a path that has no row of its own.
    ///
    /// The id is a name-based UUID of the path, so it is deterministic but
    /// carries no meaning beyond the listing that produced it.
    pub fn synthesized_folder(name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_URL, path.as_bytes()).to_string(),
            name: name.into(),
            path,
            size: 0,
            kind: ItemKind::Folder,
            synthesized: true,
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Listing order: folders before files, then by name (case-sensitive),
    /// then by path so that equal names still order deterministically.
    pub fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.path.cmp(&b.path))
    }

    /// Search order: type tag descending, then name ascending, then path.
    pub fn search_order(a: &Self, b: &Self) -> Ordering {
        b.kind
            .as_str()
            .cmp(a.kind.as_str())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.path.cmp(&b.path))
    }
}

impl From<CatalogRow> for DirectoryEntry {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            path: row.path,
            size: row.size,
            kind: row.kind,
            synthesized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_id_is_deterministic_per_path() {
        let a = DirectoryEntry::synthesized_folder("x", "/a/x");
        let b = DirectoryEntry::synthesized_folder("x", "/a/x");
        let c = DirectoryEntry::synthesized_folder("y", "/a/y");
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_eq!(a.size, 0);
        assert!(a.is_folder());
        assert!(a.synthesized);
    }

    #[test]
    fn test_listing_order() {
        let mut entries = vec![
            DirectoryEntry::from(CatalogRow::file("1", "/Beta", 10)),
            DirectoryEntry::from(CatalogRow::folder("2", "/Zeta")),
            DirectoryEntry::from(CatalogRow::folder("3", "/Alpha")),
            DirectoryEntry::from(CatalogRow::file("4", "/alpha.txt", 1)),
        ];
        entries.sort_by(DirectoryEntry::listing_order);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zeta", "Beta", "alpha.txt"]);
    }
}
