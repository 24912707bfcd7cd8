//! SQLite-backed catalog item repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::RowStore;
use catalog_core::types::{contains_folded, fold_case};
use catalog_entity::{CatalogRow, CatalogStats};

const ROW_COLUMNS: &str = "id, name, path, size, type, last_modified, deleted, synced_at";

/// Repository over the `items` table.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count all rows, deleted ones included.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::StoreAccess, "Failed to count items", e))?;
        Ok(count as u64)
    }

    /// Return up to `limit` stored paths in table order.
    pub async fn sample_paths(&self, limit: u32) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT path FROM items LIMIT ?")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreAccess, "Failed to sample item paths", e)
            })
    }

    /// Read the catalog version recorded by the sync process.
    ///
    /// Bundled catalogs that predate the metadata table report `None`.
    pub async fn current_version(&self) -> AppResult<Option<String>> {
        let has_meta: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'catalog_meta'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::StoreAccess, "Failed to inspect schema", e))?;

        if has_meta == 0 {
            return Ok(None);
        }

        sqlx::query_scalar::<_, String>("SELECT value FROM catalog_meta WHERE key = 'version'")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreAccess, "Failed to read catalog version", e)
            })
    }

    /// Collect the diagnostics shown when a listing comes back empty.
    pub async fn stats(&self, sample_size: u32) -> AppResult<CatalogStats> {
        Ok(CatalogStats {
            total_items: self.count().await?,
            sample_paths: self.sample_paths(sample_size).await?,
            version: self.current_version().await?,
        })
    }

    /// Insert or replace rows in a single transaction.
    ///
    /// Used to load fixtures and by import tooling; the browser itself never
    /// writes.
    pub async fn upsert_many(&self, rows: &[CatalogRow]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::StoreAccess, "Failed to begin transaction", e)
        })?;

        for row in rows {
            sqlx::query(
                "INSERT OR REPLACE INTO items \
                 (id, name, path, size, type, last_modified, deleted, synced_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.path)
            .bind(row.size)
            .bind(row.kind)
            .bind(&row.last_modified)
            .bind(row.deleted)
            .bind(row.synced_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreAccess,
                    format!("Failed to write item '{}'", row.path),
                    e,
                )
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::StoreAccess, "Failed to commit items", e)
        })
    }

    /// Record the catalog version.
    pub async fn set_version(&self, version: &str) -> AppResult<()> {
        sqlx::query("INSERT OR REPLACE INTO catalog_meta (key, value) VALUES ('version', ?)")
            .bind(version)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StoreAccess, "Failed to write catalog version", e)
            })?;
        Ok(())
    }
}

#[async_trait]
impl RowStore<CatalogRow> for ItemRepository {
    async fn scan_by_path_prefix(&self, prefix: &str) -> AppResult<Vec<CatalogRow>> {
        let range_sql = prefix_range_sql();
        let tail_sql = prefix_tail_sql();
        let query = match prefix_upper_bound(prefix) {
            Some(upper) => sqlx::query_as::<_, CatalogRow>(&range_sql)
                .bind(prefix)
                .bind(upper),
            None => sqlx::query_as::<_, CatalogRow>(&tail_sql)
                .bind(prefix)
                .bind(prefix)
                .bind(prefix),
        };
        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreAccess,
                format!("Failed to scan items under '{prefix}'"),
                e,
            )
        })?;
        debug!(prefix = %prefix, count = rows.len(), "Prefix scan");
        Ok(rows)
    }

    async fn scan_by_name_substring(&self, needle: &str) -> AppResult<Vec<CatalogRow>> {
        // LIKE folds ASCII only, so matching happens on this side.
        let sql = format!(
            "SELECT {ROW_COLUMNS} FROM items WHERE deleted = 0 ORDER BY type DESC, name ASC"
        );
        let folded = fold_case(needle);
        let rows: Vec<CatalogRow> = sqlx::query_as::<_, CatalogRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::StoreAccess, "Failed to search items", e))?
            .into_iter()
            .filter(|row| contains_folded(&row.name, &folded))
            .collect();
        debug!(needle = %needle, count = rows.len(), "Name scan");
        Ok(rows)
    }
}

/// Paths in `[prefix, upper)` under SQLite's binary collation.
fn prefix_range_sql() -> String {
    format!("SELECT {ROW_COLUMNS} FROM items WHERE path >= ? AND path < ?")
}

/// Fallback for prefixes with no upper bound.
fn prefix_tail_sql() -> String {
    format!(
        "SELECT {ROW_COLUMNS} FROM items WHERE path >= ? AND substr(path, 1, length(?)) = ?"
    )
}

/// Smallest string greater than every string starting with `prefix`.
///
/// Binary collation orders UTF-8 text by code point, so bumping the last
/// character is enough: `"/a/"` becomes `"/a0"`. Returns `None` for the
/// empty prefix or when the last character has no successor.
fn prefix_upper_bound(prefix: &str) -> Option<String> {
    let mut chars: Vec<char> = prefix.chars().collect();
    let last = chars.pop()?;
    let next = match last as u32 + 1 {
        0xD800 => '\u{E000}',
        code => char::from_u32(code)?,
    };
    chars.push(next);
    Some(chars.into_iter().collect())
}
