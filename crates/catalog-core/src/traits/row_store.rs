//! Read-only row store trait for the flat catalog table.

use async_trait::async_trait;

use crate::result::AppResult;

/// Read-only access to the flat table of catalog rows.
///
/// The trait is generic over the row type so that `catalog-core` stays
/// free of entity definitions; the catalog instantiates it with
/// `catalog_entity::CatalogRow`. Every failure is reported as an
/// [`ErrorKind::StoreAccess`](crate::error::ErrorKind::StoreAccess) error
/// and the full matching set is returned or nothing is.
#[async_trait]
pub trait RowStore<Row>: Send + Sync + std::fmt::Debug + 'static
where
    Row: Send + 'static,
{
    /// Return every row whose path begins with `prefix` (case-sensitive,
    /// no wildcard interpretation). Order is unspecified.
    async fn scan_by_path_prefix(&self, prefix: &str) -> AppResult<Vec<Row>>;

    /// Return every non-deleted row whose name contains `needle`,
    /// ignoring case as [`fold_case`](crate::types::fold_case) does.
    /// `%`, `_` and `\` in `needle` match literally.
    async fn scan_by_name_substring(&self, needle: &str) -> AppResult<Vec<Row>>;
}
