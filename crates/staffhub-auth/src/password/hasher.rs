//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::debug;

use staffhub_core::config::AuthConfig;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;

/// Hashes and verifies passwords with Argon2id.
///
/// Cost parameters come from [`AuthConfig`]. Verification always reads the
/// parameters embedded in the stored hash, so changing the configured cost
/// does not invalidate existing hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Build a hasher from the configured cost parameters.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch and a malformed stored hash both yield `false`.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// [`hash_password`](Self::hash_password) on the blocking thread pool.
    pub async fn hash_password_blocking(&self, password: String) -> AppResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    /// [`verify_password`](Self::verify_password) on the blocking thread pool.
    pub async fn verify_password_blocking(&self, password: String, hash: String) -> bool {
        let hasher = self.clone();
        match tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash)).await {
            Ok(matched) => matched,
            Err(e) => {
                debug!(error = %e, "Verification task failed");
                false
            }
        }
    }
}
