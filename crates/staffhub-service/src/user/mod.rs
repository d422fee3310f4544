//! User directory and admin privilege services.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::{NewUser, UserService};

use uuid::Uuid;

use staffhub_core::error::AppError;

/// The 404 returned whenever a user id does not resolve.
pub(crate) fn user_not_found(user_id: Uuid) -> AppError {
    AppError::not_found(format!("User with id {user_id} not found."))
}
