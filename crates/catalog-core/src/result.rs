//! Convenience result type alias for the movie catalog.

use crate::error::AppError;

/// A specialized `Result` type for catalog operations.
pub type AppResult<T> = Result<T, AppError>;
