//! Custom Axum extractors.

pub mod auth;
pub mod query;
pub mod validated;

pub use auth::AuthUser;
pub use query::{QueryParams, SalaryIdQuery, UserIdQuery};
pub use validated::{FormBody, ValidatedJson};
