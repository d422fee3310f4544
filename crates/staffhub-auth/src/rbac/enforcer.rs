//! RBAC enforcement: may `actor` mutate or read privileged data of `target`?

use tracing::debug;

use staffhub_core::error::AppError;
use staffhub_entity::user::{RoleSet, User};

/// Decides whether an acting user may act on a target user.
///
/// Rules, first match wins:
///
/// 1. acting on yourself is permitted;
/// 2. an actor holding neither ADMIN nor SUPERUSER is denied;
/// 3. an ADMIN actor may not act on a SUPERUSER;
/// 4. an ADMIN actor may not act on another ADMIN;
/// 5. anything else is permitted.
///
/// Rules 3 and 4 look only at whether the actor holds ADMIN, so an actor
/// holding both ADMIN and SUPERUSER is bound by them too.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns whether `actor` may act on `target`.
    pub fn is_action_permitted(&self, target: &User, actor: &User) -> bool {
        if target.user_id == actor.user_id {
            return true;
        }
        roles_permit(&target.roles, &actor.roles)
    }

    /// Like [`is_action_permitted`](Self::is_action_permitted), failing with `Forbidden.`.
    pub fn require_action_permitted(&self, target: &User, actor: &User) -> Result<(), AppError> {
        if self.is_action_permitted(target, actor) {
            Ok(())
        } else {
            debug!(
                actor_id = %actor.user_id,
                target_id = %target.user_id,
                "Action denied by role rules"
            );
            Err(AppError::forbidden())
        }
    }

    /// Only SUPERUSER actors may grant the admin role.
    pub fn require_can_grant_admin(&self, actor: &User) -> Result<(), AppError> {
        if actor.is_superuser() {
            Ok(())
        } else {
            Err(AppError::forbidden())
        }
    }

    /// A SUPERUSER target can never be deleted through the API.
    pub fn require_deletable(&self, target: &User) -> Result<(), AppError> {
        if target.is_superuser() {
            Err(AppError::conflict("Superuser can't be deleted using API"))
        } else {
            Ok(())
        }
    }
}

/// Rules 2–5 for two distinct users.
fn roles_permit(target: &RoleSet, actor: &RoleSet) -> bool {
    if !actor.is_elevated() {
        return false;
    }
    if actor.is_admin() && (target.is_superuser() || target.is_admin()) {
        return false;
    }
    true
}
