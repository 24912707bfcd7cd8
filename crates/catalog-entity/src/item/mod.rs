//! Catalog item entities.

pub mod entry;
pub mod kind;
pub mod row;

pub use entry::DirectoryEntry;
pub use kind::ItemKind;
pub use row::CatalogRow;
