//! In-process row store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::result::AppResult;
use catalog_core::traits::RowStore;
use catalog_core::types::{contains_folded, fold_case};
use catalog_entity::CatalogRow;

/// Row store holding catalog rows in memory.
///
/// Matches the SQLite repository's semantics: prefix scans are
/// case-sensitive and return rows in insertion order; name scans fold case,
/// skip tombstones, and order by type tag descending then name.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowStore {
    rows: Arc<RwLock<Vec<CatalogRow>>>,
}

impl MemoryRowStore {
    /// Create a store holding `rows`.
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Append a row.
    pub async fn insert(&self, row: CatalogRow) {
        self.rows.write().await.push(row);
    }

    /// Number of rows held.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl RowStore<CatalogRow> for MemoryRowStore {
    async fn scan_by_path_prefix(&self, prefix: &str) -> AppResult<Vec<CatalogRow>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.path.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn scan_by_name_substring(&self, needle: &str) -> AppResult<Vec<CatalogRow>> {
        let needle = fold_case(needle);
        let rows = self.rows.read().await;
        let mut matches: Vec<CatalogRow> = rows
            .iter()
            .filter(|row| !row.is_deleted() && contains_folded(&row.name, &needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.kind
                .as_str()
                .cmp(a.kind.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(matches)
    }
}

impl FromIterator<CatalogRow> for MemoryRowStore {
    fn from_iter<I: IntoIterator<Item = CatalogRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prefix_scan_keeps_insertion_order() {
        let store: MemoryRowStore = [
            CatalogRow::file("2", "/a/z.mkv", 1),
            CatalogRow::file("1", "/a/b.mkv", 1),
            CatalogRow::file("3", "/ab/c.mkv", 1),
        ]
        .into_iter()
        .collect();

        let ids: Vec<_> = store
            .scan_by_path_prefix("/a/")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[tokio::test]
    async fn test_name_scan_folds_case() {
        let store = MemoryRowStore::default();
        store.insert(CatalogRow::file("1", "/x/Movie.mkv", 1)).await;
        store.insert(CatalogRow::file("2", "/x/movement.txt", 1)).await;
        store.insert(CatalogRow::file("3", "/x/Document.pdf", 1)).await;
        store
            .insert(CatalogRow::file("4", "/x/MOVED.bak", 1).tombstoned())
            .await;

        let names: Vec<_> = store
            .scan_by_name_substring("MoV")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Movie.mkv", "movement.txt"]);
        assert_eq!(store.len().await, 4);
    }
}
