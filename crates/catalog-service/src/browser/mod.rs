//! Caller-facing catalog browsing.

pub mod service;

pub use service::{CatalogBrowser, Listing};
