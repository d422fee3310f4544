//! User role enumeration and the role set carried by every principal.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use staffhub_core::AppError;

/// Roles available in the RBAC system.
///
/// The serialized tag is the same on the wire and in storage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Role {
    /// Every principal holds this role from creation.
    #[serde(rename = "ROLE_PORTAL_USER")]
    Ordinary,
    /// May act on ordinary principals.
    #[serde(rename = "ROLE_PORTAL_ADMIN")]
    Admin,
    /// May act on anyone and grant admin privileges.
    #[serde(rename = "ROLE_PORTAL_SUPERUSER")]
    Superuser,
}

impl Role {
    /// Return the storage tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ROLE_PORTAL_USER",
            Self::Admin => "ROLE_PORTAL_ADMIN",
            Self::Superuser => "ROLE_PORTAL_SUPERUSER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_PORTAL_USER" => Ok(Self::Ordinary),
            "ROLE_PORTAL_ADMIN" => Ok(Self::Admin),
            "ROLE_PORTAL_SUPERUSER" => Ok(Self::Superuser),
            _ => Err(AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ROLE_PORTAL_USER, ROLE_PORTAL_ADMIN, ROLE_PORTAL_SUPERUSER"
            ))),
        }
    }
}

/// A non-empty set of roles.
///
/// Stored as an ordered list of tags but compared by membership only, so
/// `[ADMIN, USER]` and `[USER, ADMIN]` are the same set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// The role set every new principal starts with.
    pub fn ordinary() -> Self {
        Self(BTreeSet::from([Role::Ordinary]))
    }

    /// Build a role set from any collection of roles; empty input is rejected.
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Result<Self, AppError> {
        let set: BTreeSet<Role> = roles.into_iter().collect();
        if set.is_empty() {
            return Err(AppError::validation("A principal must hold at least one role"));
        }
        Ok(Self(set))
    }

    /// Check membership.
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    /// Check if the set holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.contains(Role::Admin)
    }

    /// Check if the set holds the superuser role.
    pub fn is_superuser(&self) -> bool {
        self.contains(Role::Superuser)
    }

    /// Check if the set holds admin or superuser.
    pub fn is_elevated(&self) -> bool {
        self.is_admin() || self.is_superuser()
    }

    /// Return a copy of this set with the admin role added.
    pub fn with_admin(&self) -> Self {
        let mut roles = self.0.clone();
        roles.insert(Role::Admin);
        Self(roles)
    }

    /// Iterate the roles in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }

    /// Number of distinct roles held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no roles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Storage representation: one tag per role.
    pub fn to_tags(&self) -> Vec<String> {
        self.0.iter().map(|r| r.as_str().to_string()).collect()
    }
}

impl TryFrom<Vec<Role>> for RoleSet {
    type Error = AppError;

    fn try_from(roles: Vec<Role>) -> Result<Self, Self::Error> {
        Self::from_roles(roles)
    }
}

impl TryFrom<Vec<String>> for RoleSet {
    type Error = AppError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let roles = tags
            .iter()
            .map(|t| t.parse::<Role>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_roles(roles)
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.0.into_iter().collect()
    }
}
