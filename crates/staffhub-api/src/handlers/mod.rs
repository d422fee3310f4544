//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod compensation;
pub mod health;
pub mod user;
