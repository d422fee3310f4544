//! Role-based access decisions between an acting user and a target user.

pub mod enforcer;

pub use enforcer::RbacEnforcer;
