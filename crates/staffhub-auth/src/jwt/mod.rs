//! Bearer token issue and validation.
//!
//! Tokens are HMAC-signed JWTs carrying the user's login as `sub` and an
//! absolute `exp`. A single algorithm is configured; tokens signed with any
//! other algorithm are rejected.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};

use jsonwebtoken::Algorithm;

use staffhub_core::error::AppError;

/// Parse the configured signing algorithm. Only HMAC variants are accepted.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported JWT algorithm: '{other}'. Supported: HS256, HS384, HS512"
        ))),
    }
}
