//! # catalog-entity
//!
//! Domain models for the movie catalog. [`CatalogRow`] mirrors one row of
//! the `items` table and derives `sqlx::FromRow`; [`DirectoryEntry`] is the
//! ephemeral value produced by directory listings and searches.

pub mod item;
pub mod stats;

pub use item::{CatalogRow, DirectoryEntry, ItemKind};
pub use stats::CatalogStats;
