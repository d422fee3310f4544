//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use staffhub_entity::compensation::CompensationChanges;
use staffhub_entity::user::UserChanges;
use staffhub_service::compensation::NewCompensation;
use staffhub_service::user::NewUser;

/// Date format for `next_salary_increase`.
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d";

/// Names may only contain Latin or Cyrillic letters and hyphens.
fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| {
        c.is_ascii_alphabetic() || c == '-' || ('а'..='я').contains(&c) || ('А'..='Я').contains(&c)
    };
    if !value.is_empty() && value.chars().all(allowed) {
        Ok(())
    } else {
        Err(ValidationError::new("letters_only"))
    }
}

fn validate_review_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, REVIEW_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date_format"))
}

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// The user's login.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Desired login.
    #[validate(length(min = 1, message = "Login is required"))]
    pub login: String,
    /// Given name.
    #[validate(custom(
        function = "validate_person_name",
        message = "Name should contain only letters"
    ))]
    pub name: String,
    /// Family name.
    #[validate(custom(
        function = "validate_person_name",
        message = "Surname should contain only letters"
    ))]
    pub surname: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            login: req.login,
            name: req.name,
            surname: req.surname,
            email: req.email,
            password: req.password,
        }
    }
}

/// Partial user update body; roles cannot be changed through it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New given name.
    #[validate(custom(
        function = "validate_person_name",
        message = "Name should contain only letters"
    ))]
    pub name: Option<String>,
    /// New family name.
    #[validate(custom(
        function = "validate_person_name",
        message = "Surname should contain only letters"
    ))]
    pub surname: Option<String>,
    /// New email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            email: req.email,
            roles: None,
        }
    }
}

/// Compensation record creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSalaryRequest {
    /// Owning user.
    pub user_id: Uuid,
    /// Salary; integers are accepted and normalized.
    pub salary: f64,
    /// Next review date, `YYYY-MM-DD`.
    #[validate(custom(
        function = "validate_review_date",
        message = "Incorrect data format, should be YYYY-MM-DD"
    ))]
    pub next_salary_increase: String,
}

impl From<CreateSalaryRequest> for NewCompensation {
    fn from(req: CreateSalaryRequest) -> Self {
        Self {
            user_id: req.user_id,
            amount: req.salary,
            next_review_date: req.next_salary_increase,
        }
    }
}

/// Partial compensation update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSalaryRequest {
    /// New salary.
    pub salary: Option<f64>,
    /// New review date, `YYYY-MM-DD`.
    #[validate(custom(
        function = "validate_review_date",
        message = "Incorrect data format, should be YYYY-MM-DD"
    ))]
    pub next_salary_increase: Option<String>,
}

impl From<UpdateSalaryRequest> for CompensationChanges {
    fn from(req: UpdateSalaryRequest) -> Self {
        Self {
            amount: req.salary,
            next_review_date: req.next_salary_increase,
        }
    }
}
