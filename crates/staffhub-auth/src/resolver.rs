//! Principal resolution from login/password pairs and bearer tokens.

use tracing::debug;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_database::RecordStore;
use staffhub_entity::user::User;

use crate::jwt::JwtDecoder;
use crate::password::PasswordHasher;

/// Maps credentials to the user they belong to, failing closed.
#[derive(Debug, Clone)]
pub struct PrincipalResolver {
    store: RecordStore,
    hasher: PasswordHasher,
    decoder: JwtDecoder,
}

impl PrincipalResolver {
    /// Creates a resolver over the given store.
    pub fn new(store: RecordStore, hasher: PasswordHasher, decoder: JwtDecoder) -> Self {
        Self {
            store,
            hasher,
            decoder,
        }
    }

    /// Look a user up by login. Inactive users are still returned.
    pub async fn resolve_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.store.users().find_by_login(login).await
    }

    /// Check a login/password pair.
    ///
    /// An unknown login and a wrong password both yield `None`.
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.resolve_by_login(login).await? else {
            debug!(login = %login, "Authentication failed: unknown login");
            return Ok(None);
        };

        let matched = self
            .hasher
            .verify_password_blocking(password.to_string(), user.hashed_password.clone())
            .await;
        if !matched {
            debug!(login = %login, "Authentication failed: password mismatch");
            return Ok(None);
        }
        Ok(Some(user))
    }

    /// Validate a bearer token and load the user it names.
    ///
    /// Fails with the opaque credential error when the token is invalid or
    /// its subject no longer maps to a user.
    pub async fn resolve_from_token(&self, token: &str) -> AppResult<User> {
        let login = self.decoder.validate(token)?;
        match self.resolve_by_login(&login).await? {
            Some(user) => Ok(user),
            None => {
                debug!(login = %login, "Token subject has no matching user");
                Err(AppError::invalid_credentials())
            }
        }
    }
}
