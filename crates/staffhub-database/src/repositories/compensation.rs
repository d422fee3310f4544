//! Compensation repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::result::AppResult;
use staffhub_entity::compensation::{Compensation, CompensationChanges, CreateCompensation};

use super::store_error;
use crate::store::CompensationStore;

/// PostgreSQL-backed compensation store.
#[derive(Debug, Clone)]
pub struct CompensationRepository {
    pool: PgPool,
}

impl CompensationRepository {
    /// Create a new compensation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompensationStore for CompensationRepository {
    async fn create(&self, data: &CreateCompensation) -> AppResult<Compensation> {
        sqlx::query_as::<_, Compensation>(
            "INSERT INTO compensations (compensation_id, user_id, amount, next_review_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.amount)
        .bind(&data.next_review_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Failed to create compensation", e))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Compensation>> {
        sqlx::query_as::<_, Compensation>("SELECT * FROM compensations WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find compensation by user", e))
    }

    async fn find_by_id(&self, compensation_id: Uuid) -> AppResult<Option<Compensation>> {
        sqlx::query_as::<_, Compensation>(
            "SELECT * FROM compensations WHERE compensation_id = $1",
        )
        .bind(compensation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to find compensation by id", e))
    }

    async fn update(
        &self,
        compensation_id: Uuid,
        changes: &CompensationChanges,
    ) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "UPDATE compensations SET amount = COALESCE($2, amount), \
                                      next_review_date = COALESCE($3, next_review_date) \
             WHERE compensation_id = $1 \
             RETURNING compensation_id",
        )
        .bind(compensation_id)
        .bind(changes.amount)
        .bind(&changes.next_review_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to update compensation", e))
    }

    async fn delete(&self, compensation_id: Uuid) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM compensations WHERE compensation_id = $1 RETURNING compensation_id",
        )
        .bind(compensation_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to delete compensation", e))
    }
}
