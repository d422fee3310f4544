//! User (principal) domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, User, UserChanges};
pub use role::{Role, RoleSet};
