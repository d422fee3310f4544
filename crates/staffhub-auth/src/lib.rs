//! # staffhub-auth
//!
//! Authentication and authorization for StaffHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id credential hashing and verification
//! - `jwt` — signed, time-bound bearer token issue and validation
//! - `resolver` — maps tokens and login/password pairs to users
//! - `rbac` — the access decision rules for acting on another user

pub mod jwt;
pub mod password;
pub mod rbac;
pub mod resolver;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::RbacEnforcer;
pub use resolver::PrincipalResolver;
