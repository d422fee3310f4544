//! Convenience result type alias for StaffHub.

use crate::error::AppError;

/// A specialized `Result` type for StaffHub operations.
pub type AppResult<T> = Result<T, AppError>;
