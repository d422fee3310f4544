//! JWT claims payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's login.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
}

impl Claims {
    /// Claims for `subject` valid from `now` until `expires_at`.
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Expiration as a `DateTime<Utc>`, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
