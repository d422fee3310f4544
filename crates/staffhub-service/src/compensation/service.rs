//! Compensation record operations, each gated on the record's owner.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staffhub_auth::rbac::RbacEnforcer;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_database::RecordStore;
use staffhub_entity::compensation::{Compensation, CompensationChanges, CreateCompensation};
use staffhub_entity::user::User;

use crate::context::RequestContext;
use crate::user::user_not_found;

/// Data for a new compensation record.
#[derive(Debug, Clone)]
pub struct NewCompensation {
    /// Owning user.
    pub user_id: Uuid,
    /// Salary amount.
    pub amount: f64,
    /// Next review date, `YYYY-MM-DD`.
    pub next_review_date: String,
}

fn record_not_found(compensation_id: Uuid) -> AppError {
    AppError::not_found(format!("Salary info with id {compensation_id} not found."))
}

/// Handles compensation records.
#[derive(Debug, Clone)]
pub struct CompensationService {
    store: RecordStore,
    rbac: Arc<RbacEnforcer>,
}

impl CompensationService {
    /// Creates a new compensation service.
    pub fn new(store: RecordStore, rbac: Arc<RbacEnforcer>) -> Self {
        Self { store, rbac }
    }

    async fn load_user(&self, user_id: Uuid) -> AppResult<User> {
        self.store
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }

    async fn load_record(&self, compensation_id: Uuid) -> AppResult<Compensation> {
        self.store
            .compensations()
            .find_by_id(compensation_id)
            .await?
            .ok_or_else(|| record_not_found(compensation_id))
    }

    /// Creates the compensation record of an active user.
    pub async fn create(&self, ctx: &RequestContext, req: NewCompensation) -> AppResult<Compensation> {
        let owner = self.load_user(req.user_id).await?;
        self.rbac.require_action_permitted(&owner, &ctx.actor)?;
        if !owner.is_active {
            return Err(AppError::authorization(format!(
                "User with id {} is deactivated.",
                owner.user_id
            )));
        }

        let record = self
            .store
            .compensations()
            .create(&CreateCompensation {
                user_id: req.user_id,
                amount: req.amount,
                next_review_date: req.next_review_date,
            })
            .await?;

        info!(
            actor_id = %ctx.user_id(),
            user_id = %record.user_id,
            compensation_id = %record.compensation_id,
            "Compensation record created"
        );
        Ok(record)
    }

    /// Returns the acting user's own record.
    pub async fn get_own(&self, ctx: &RequestContext) -> AppResult<Compensation> {
        self.store
            .compensations()
            .find_by_user_id(ctx.user_id())
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Your salary info not found (user_id = {}).",
                    ctx.user_id()
                ))
            })
    }

    /// Applies a partial update to a record.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        compensation_id: Uuid,
        changes: CompensationChanges,
    ) -> AppResult<Uuid> {
        if changes.is_empty() {
            return Err(AppError::validation(
                "At least one parameter for salary info update should be provided",
            ));
        }

        let record = self.load_record(compensation_id).await?;
        let owner = self.load_user(record.user_id).await?;
        self.rbac.require_action_permitted(&owner, &ctx.actor)?;

        let updated = self
            .store
            .compensations()
            .update(compensation_id, &changes)
            .await?
            .ok_or_else(|| record_not_found(compensation_id))?;

        info!(actor_id = %ctx.user_id(), compensation_id = %updated, "Compensation record updated");
        Ok(updated)
    }

    /// Hard-deletes a record.
    pub async fn delete(&self, ctx: &RequestContext, compensation_id: Uuid) -> AppResult<Uuid> {
        let record = self.load_record(compensation_id).await?;
        let owner = self.load_user(record.user_id).await?;
        self.rbac.require_action_permitted(&owner, &ctx.actor)?;

        let deleted = self
            .store
            .compensations()
            .delete(compensation_id)
            .await?
            .ok_or_else(|| record_not_found(compensation_id))?;

        info!(actor_id = %ctx.user_id(), compensation_id = %deleted, "Compensation record deleted");
        Ok(deleted)
    }
}
