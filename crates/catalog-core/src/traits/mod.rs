//! Core traits defined in `catalog-core` and implemented by other crates.

pub mod row_store;

pub use row_store::RowStore;
