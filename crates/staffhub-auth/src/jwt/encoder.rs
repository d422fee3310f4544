//! Bearer token issue.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use staffhub_core::config::AuthConfig;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;

use super::claims::Claims;
use super::parse_algorithm;

/// A freshly issued access token.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// The encoded token.
    pub access_token: String,
    /// When the token stops validating.
    pub expires_at: DateTime<Utc>,
}

/// Signs bearer tokens with the configured secret and algorithm.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    header: Header,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Create an encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        let minutes = i64::try_from(config.access_token_ttl_minutes)
            .map_err(|_| AppError::configuration("access_token_ttl_minutes is too large"))?;
        let access_ttl = Duration::try_minutes(minutes)
            .ok_or_else(|| AppError::configuration("access_token_ttl_minutes is too large"))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(algorithm),
            access_ttl,
        })
    }

    /// Sign a token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> AppResult<String> {
        self.issue_at(subject, Utc::now(), ttl).map(|t| t.access_token)
    }

    /// Sign a token for `subject` using the configured access token TTL.
    pub fn issue_access_token(&self, subject: &str) -> AppResult<IssuedToken> {
        self.issue_at(subject, Utc::now(), self.access_ttl)
    }

    /// The configured access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    fn issue_at(&self, subject: &str, now: DateTime<Utc>, ttl: Duration) -> AppResult<IssuedToken> {
        let expires_at = now + ttl;
        let claims = Claims::new(subject, now, expires_at);
        let access_token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;
        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}
