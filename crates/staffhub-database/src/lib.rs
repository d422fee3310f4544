//! # staffhub-database
//!
//! The record store behind StaffHub: store traits consumed by the auth and
//! service layers, PostgreSQL repositories implementing them, an in-memory
//! implementation with the same semantics, and provider selection.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::RecordStore;
pub use store::{CompensationStore, UserStore};
