//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::RoleSet;

/// A registered principal in the StaffHub directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, generated at creation.
    pub user_id: Uuid,
    /// Unique login name.
    pub login: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Unique email address.
    pub email: String,
    /// False once the user has been soft-deleted.
    pub is_active: bool,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Roles held by the user.
    #[sqlx(try_from = "Vec<String>")]
    pub roles: RoleSet,
}

impl User {
    /// Check if this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }

    /// Check if this user holds the superuser role.
    pub fn is_superuser(&self) -> bool {
        self.roles.is_superuser()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired login.
    pub login: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub hashed_password: String,
    /// Initial roles.
    pub roles: RoleSet,
}

/// Partial update of a user; only present slots are applied.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// New given name.
    pub name: Option<String>,
    /// New family name.
    pub surname: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// Replacement role set.
    pub roles: Option<RoleSet>,
}

impl UserChanges {
    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.email.is_none() && self.roles.is_none()
    }

    /// Apply the present slots to a user in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(surname) = &self.surname {
            user.surname = surname.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(roles) = &self.roles {
            user.roles = roles.clone();
        }
    }
}
