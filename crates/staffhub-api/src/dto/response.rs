//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staffhub_entity::compensation::Compensation;
use staffhub_entity::user::User;

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Wraps an encoded token.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowUser {
    /// User ID.
    pub user_id: Uuid,
    /// Login.
    pub login: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Email.
    pub email: String,
    /// False once soft-deleted.
    pub is_active: bool,
}

impl From<User> for ShowUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            login: user.login,
            name: user.name,
            surname: user.surname,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// `{ "deleted_user_id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    /// The deactivated user.
    pub deleted_user_id: Uuid,
}

/// `{ "updated_user_id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedUserResponse {
    /// The updated user.
    pub updated_user_id: Uuid,
}

/// Public view of a compensation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowSalaryInfo {
    /// Record ID.
    pub salary_id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Salary amount.
    pub salary: f64,
    /// Next review date, `YYYY-MM-DD`.
    pub next_salary_increase: String,
}

impl From<Compensation> for ShowSalaryInfo {
    fn from(record: Compensation) -> Self {
        Self {
            salary_id: record.compensation_id,
            user_id: record.user_id,
            salary: record.amount,
            next_salary_increase: record.next_review_date,
        }
    }
}

/// `{ "updated_salary_id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedSalaryInfoResponse {
    /// The updated record.
    pub updated_salary_id: Uuid,
}

/// `{ "deleted_salary_id": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSalaryInfoResponse {
    /// The removed record.
    pub deleted_salary_id: Uuid,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}
