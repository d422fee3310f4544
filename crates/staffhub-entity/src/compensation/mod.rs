//! Compensation record entities.

pub mod model;

pub use model::{Compensation, CompensationChanges, CreateCompensation};
