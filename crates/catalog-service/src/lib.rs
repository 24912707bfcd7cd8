//! # catalog-service
//!
//! Read-side services for the movie catalog. [`HierarchyResolver`] turns
//! the flat, path-keyed rows of a [`RowStore`](catalog_core::traits::RowStore)
//! into directory listings, synthesizing folders that have descendants but
//! no row of their own. [`CatalogBrowser`] layers the caller conventions on
//! top: default root, empty-query handling, and diagnostics.
//!
//! Services follow constructor injection; the store handle is passed in.

pub mod browser;
pub mod hierarchy;

pub use browser::{CatalogBrowser, Listing};
pub use hierarchy::HierarchyResolver;
