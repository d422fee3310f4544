//! PostgreSQL repository implementations of the record store traits.

pub mod compensation;
pub mod user;

pub use compensation::CompensationRepository;
pub use user::UserRepository;

use staffhub_core::error::{AppError, ErrorKind};

/// Wrap a sqlx failure as a store error.
///
/// Uniqueness and foreign-key violations land here too; callers see them as
/// a service-unavailable class failure, never as a retry.
pub(crate) fn store_error(context: &str, err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "{context}");
    AppError::with_source(ErrorKind::Database, format!("Database error: {err}"), err)
}
