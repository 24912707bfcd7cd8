//! Shared value helpers used across the catalog.

pub mod path;
pub mod size;
pub mod text;

pub use path::{child_path, directory_prefix};
pub use size::format_size;
pub use text::{contains_folded, fold_case};
