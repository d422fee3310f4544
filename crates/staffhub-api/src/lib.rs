//! # staffhub-api
//!
//! HTTP API layer for StaffHub built on Axum.
//!
//! Provides the login, user directory, admin privilege and compensation
//! endpoints, middleware (logging, CORS, compression), extractors, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
