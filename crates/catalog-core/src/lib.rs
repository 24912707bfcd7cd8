//! # catalog-core
//!
//! Core crate for the movie catalog. Contains the row-store trait,
//! configuration schemas, catalog path helpers, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
