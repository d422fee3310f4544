//! Compensation record services.

pub mod service;

pub use service::{CompensationService, NewCompensation};
