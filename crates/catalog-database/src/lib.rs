//! # catalog-database
//!
//! SQLite connection management, first-open seeding, schema migrations,
//! and the [`RowStore`](catalog_core::traits::RowStore) implementations
//! backing the catalog.

pub mod bootstrap;
pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{ItemRepository, MemoryRowStore};
