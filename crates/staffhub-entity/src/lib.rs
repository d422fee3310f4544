//! # staffhub-entity
//!
//! Domain entity models for StaffHub. Every struct in this crate represents a
//! database table row or a domain value object. Row entities additionally
//! derive `sqlx::FromRow`.

pub mod compensation;
pub mod user;
