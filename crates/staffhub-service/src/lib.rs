//! # staffhub-service
//!
//! Business logic service layer for StaffHub. Each operation follows the
//! same sequence: take the resolved actor from the [`RequestContext`], load
//! the target record, ask the RBAC enforcer, then mutate the record store.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod compensation;
pub mod context;
pub mod user;

pub use compensation::CompensationService;
pub use context::RequestContext;
pub use user::{AdminUserService, NewUser, UserService};
