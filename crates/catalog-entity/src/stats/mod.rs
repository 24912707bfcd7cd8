//! Catalog statistics.

pub mod model;

pub use model::CatalogStats;
