//! Compensation record entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Salary information attached to at most one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Compensation {
    /// Unique record identifier.
    pub compensation_id: Uuid,
    /// Owning user (unique across records).
    pub user_id: Uuid,
    /// Salary amount.
    pub amount: f64,
    /// Next review date, `YYYY-MM-DD`.
    pub next_review_date: String,
}

/// Data required to create a compensation record.
#[derive(Debug, Clone)]
pub struct CreateCompensation {
    /// Owning user.
    pub user_id: Uuid,
    /// Salary amount.
    pub amount: f64,
    /// Next review date, `YYYY-MM-DD`.
    pub next_review_date: String,
}

/// Partial update of a compensation record.
#[derive(Debug, Clone, Default)]
pub struct CompensationChanges {
    /// New amount.
    pub amount: Option<f64>,
    /// New review date.
    pub next_review_date: Option<String>,
}

impl CompensationChanges {
    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.next_review_date.is_none()
    }

    /// Apply the present slots to a record in place.
    pub fn apply_to(&self, record: &mut Compensation) {
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(date) = &self.next_review_date {
            record.next_review_date = date.clone();
        }
    }
}
