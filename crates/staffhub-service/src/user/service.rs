//! User directory operations: registration, lookup, profile update, soft delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_auth::password::PasswordHasher;
use staffhub_auth::rbac::RbacEnforcer;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_database::RecordStore;
use staffhub_entity::user::{CreateUser, RoleSet, User, UserChanges};

use super::user_not_found;
use crate::context::RequestContext;

/// Registration data for a new user; the password is still plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired login.
    pub login: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed before it reaches the store.
    pub password: String,
}

impl NewUser {
    pub(crate) async fn into_create(
        self,
        hasher: &PasswordHasher,
        roles: RoleSet,
    ) -> AppResult<CreateUser> {
        let hashed_password = hasher.hash_password_blocking(self.password).await?;
        Ok(CreateUser {
            login: self.login,
            name: self.name,
            surname: self.surname,
            email: self.email,
            hashed_password,
            roles,
        })
    }
}

/// Handles user directory operations.
#[derive(Debug, Clone)]
pub struct UserService {
    store: RecordStore,
    hasher: Arc<PasswordHasher>,
    rbac: Arc<RbacEnforcer>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: RecordStore, hasher: Arc<PasswordHasher>, rbac: Arc<RbacEnforcer>) -> Self {
        Self {
            store,
            hasher,
            rbac,
        }
    }

    /// Registers a new user holding only the ordinary role.
    pub async fn create_user(&self, req: NewUser) -> AppResult<User> {
        let data = req.into_create(&self.hasher, RoleSet::ordinary()).await?;
        let user = self.store.users().create(&data).await?;

        info!(user_id = %user.user_id, login = %user.login, "User created");
        Ok(user)
    }

    /// Fetches a user by ID, active or not.
    pub async fn get_user(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<User> {
        let user = self
            .store
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        tracing::debug!(actor_id = %ctx.user_id(), target_id = %user_id, "User fetched");
        Ok(user)
    }

    /// Applies a partial update to an active user.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        changes: UserChanges,
    ) -> AppResult<Uuid> {
        if changes.is_empty() {
            return Err(AppError::validation(
                "At least one parameter for user update info should be provided",
            ));
        }

        let target = self
            .store
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;
        self.rbac.require_action_permitted(&target, &ctx.actor)?;

        let updated = self
            .store
            .users()
            .update(user_id, &changes)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        info!(actor_id = %ctx.user_id(), target_id = %updated, "User updated");
        Ok(updated)
    }

    /// Soft-deletes a user by clearing its active flag.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<Uuid> {
        let target = self
            .store
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;
        self.rbac.require_deletable(&target)?;
        self.rbac.require_action_permitted(&target, &ctx.actor)?;

        let deleted = self
            .store
            .users()
            .deactivate(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;

        info!(actor_id = %ctx.user_id(), target_id = %deleted, "User deactivated");
        Ok(deleted)
    }
}
