//! Children listing and search over flat catalog rows.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, warn};

use catalog_core::error::AppError;
use catalog_core::traits::RowStore;
use catalog_core::types::{child_path, directory_prefix};
use catalog_entity::{CatalogRow, DirectoryEntry};

/// Output slot for one child path.
#[derive(Debug)]
enum Slot {
    /// Filled by a row sitting exactly at the child path.
    Real(DirectoryEntry),
    /// Fabricated because a deeper row proves the folder exists.
    Synthesized(DirectoryEntry),
}

impl Slot {
    fn into_entry(self) -> DirectoryEntry {
        match self {
            Self::Real(entry) | Self::Synthesized(entry) => entry,
        }
    }
}

/// Reconstructs directory contents from rows keyed by absolute path.
///
/// The store may hold deeply nested rows without rows for their
/// ancestors. Listing a directory groups every descendant row by its first
/// segment below the directory; a group is materialized by the row at that
/// exact path when one exists, otherwise by a synthesized folder. Nothing
/// synthesized is ever written back.
#[derive(Debug, Clone)]
pub struct HierarchyResolver {
    /// Row store.
    store: Arc<dyn RowStore<CatalogRow>>,
}

impl HierarchyResolver {
    /// Creates a resolver over `store`.
    pub fn new(store: Arc<dyn RowStore<CatalogRow>>) -> Self {
        Self { store }
    }

    /// Lists the direct children of `directory`.
    ///
    /// `"/"` lists the root. The result holds exactly one entry per
    /// distinct child path, folders first, then by name. The outcome does
    /// not depend on the order in which the store yields rows: a row at
    /// the child path always wins over a synthesized folder, and repeated
    /// deep descendants of the same folder synthesize it once.
    ///
    /// Two different rows at the same child path violate the store's
    /// integrity and fail the call rather than picking one arbitrarily.
    pub async fn list_children(&self, directory: &str) -> Result<Vec<DirectoryEntry>, AppError> {
        let prefix = directory_prefix(directory);
        let rows = self.store.scan_by_path_prefix(&prefix).await?;
        let scanned = rows.len();

        let mut slots: HashMap<String, Slot> = HashMap::new();
        for row in &rows {
            let Some(relative) = row.path.strip_prefix(prefix.as_str()) else {
                continue;
            };

            let (child_name, direct) = match relative.split_once('/') {
                None => (relative, true),
                Some((head, _)) => (head, false),
            };
            if child_name.is_empty() {
                debug!(path = %row.path, "Skipping row with empty segment");
                continue;
            }

            let path = child_path(&prefix, child_name);
            if direct {
                if let Some(Slot::Real(existing)) = slots.get(&path) {
                    if existing.id != row.id {
                        warn!(
                            path = %path,
                            first = %existing.id,
                            second = %row.id,
                            "Two rows claim the same path"
                        );
                        return Err(AppError::integrity(format!(
                            "Rows '{}' and '{}' both claim path '{path}'",
                            existing.id, row.id
                        )));
                    }
                }
                let entry = DirectoryEntry::from_row(row, path.clone());
                slots.insert(path, Slot::Real(entry));
            } else if let Entry::Vacant(vacant) = slots.entry(path) {
                let entry = DirectoryEntry::synthesized_folder(child_name, vacant.key().clone());
                vacant.insert(Slot::Synthesized(entry));
            }
        }

        let mut entries: Vec<DirectoryEntry> = slots.into_values().map(Slot::into_entry).collect();
        entries.sort_by(DirectoryEntry::listing_order);

        debug!(
            directory = %directory,
            scanned,
            children = entries.len(),
            "Listed directory"
        );
        Ok(entries)
    }

    /// Finds live rows whose name contains `query`, ignoring case.
    ///
    /// Only real rows take part; no folders are synthesized. Results are
    /// ordered by type tag descending (folders first), then name. An empty
    /// query matches every live row, so interactive callers should not
    /// forward one.
    pub async fn search(&self, query: &str) -> Result<Vec<DirectoryEntry>, AppError> {
        let rows = self.store.scan_by_name_substring(query).await?;

        let mut entries: Vec<DirectoryEntry> = rows
            .into_iter()
            .filter(|row| !row.is_deleted())
            .map(DirectoryEntry::from)
            .collect();
        entries.sort_by(DirectoryEntry::search_order);

        debug!(query = %query, matches = entries.len(), "Searched catalog");
        Ok(entries)
    }
}
