//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential hashing and bearer-token configuration.
///
/// Read once at startup and injected into the token and hashing services;
/// nothing reads it from ambient global state afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Signing algorithm name. Only HMAC algorithms are accepted.
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Clock-skew tolerance applied when checking token expiry.
    #[serde(default)]
    pub token_leeway_seconds: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_token_ttl_minutes: default_access_ttl(),
            token_leeway_seconds: 0,
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_hash_memory() -> u32 {
    19_456
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
