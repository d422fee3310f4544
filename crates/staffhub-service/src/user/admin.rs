//! Admin privilege management and superuser bootstrap.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_auth::password::PasswordHasher;
use staffhub_auth::rbac::RbacEnforcer;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_database::RecordStore;
use staffhub_entity::user::{Role, RoleSet, User};

use super::service::NewUser;
use super::user_not_found;
use crate::context::RequestContext;

/// Handles role elevation.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    store: RecordStore,
    hasher: Arc<PasswordHasher>,
    rbac: Arc<RbacEnforcer>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(store: RecordStore, hasher: Arc<PasswordHasher>, rbac: Arc<RbacEnforcer>) -> Self {
        Self {
            store,
            hasher,
            rbac,
        }
    }

    /// Adds the admin role to an ordinary user.
    ///
    /// Checked in order: the actor must be a superuser, may not target
    /// itself, the target must exist and must not already be elevated.
    pub async fn grant_admin(&self, ctx: &RequestContext, user_id: Uuid) -> AppResult<Uuid> {
        self.rbac.require_can_grant_admin(&ctx.actor)?;
        if ctx.user_id() == user_id {
            return Err(AppError::bad_request("Cannot manage privileges of itself."));
        }

        let target = self
            .store
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))?;
        if target.roles.is_elevated() {
            return Err(already_promoted(user_id));
        }

        // A concurrent grant may land between the read and the write.
        let updated = match self.store.users().grant_admin(user_id).await? {
            Some(id) => id,
            None => {
                let current = self.store.users().find_by_id(user_id).await?;
                return Err(match current {
                    Some(user) if user.is_active && user.roles.is_elevated() => {
                        already_promoted(user_id)
                    }
                    _ => user_not_found(user_id),
                });
            }
        };

        info!(actor_id = %ctx.user_id(), target_id = %updated, "Admin role granted");
        Ok(updated)
    }

    /// Creates a superuser. Not reachable over HTTP; used by the CLI.
    pub async fn create_superuser(&self, req: NewUser) -> AppResult<User> {
        let roles = RoleSet::from_roles([Role::Superuser])?;
        let data = req.into_create(&self.hasher, roles).await?;
        let user = self.store.users().create(&data).await?;

        info!(user_id = %user.user_id, login = %user.login, "Superuser created");
        Ok(user)
    }
}

fn already_promoted(user_id: Uuid) -> AppError {
    AppError::conflict(format!(
        "User with id {user_id} already promoted to admin / superuser."
    ))
}
