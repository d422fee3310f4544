//! Bearer token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;

use staffhub_core::config::AuthConfig;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;

use super::claims::Claims;
use super::parse_algorithm;

/// Validates bearer tokens and extracts the subject login.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl JwtDecoder {
    /// Create a decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.leeway = config.token_leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Validate `token` and return its subject login.
    ///
    /// Every failure, whatever the cause, is the same opaque credential error.
    pub fn validate(&self, token: &str) -> AppResult<String> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Validate `token` and return its full claims.
    pub fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!(reason = ?e.kind(), "Token rejected");
            AppError::invalid_credentials()
        })?;

        if data.claims.sub.is_empty() {
            debug!("Token rejected: empty subject");
            return Err(AppError::invalid_credentials());
        }
        Ok(data.claims)
    }
}
