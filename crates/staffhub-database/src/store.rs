//! Record store traits.
//!
//! Both traits are implemented by the PostgreSQL repositories and by
//! [`MemoryStore`](crate::memory::MemoryStore). Updates and soft deletes only
//! touch active users; `None` means the row was missing or inactive.

use async_trait::async_trait;
use uuid::Uuid;

use staffhub_core::result::AppResult;
use staffhub_entity::compensation::{Compensation, CompensationChanges, CreateCompensation};
use staffhub_entity::user::{CreateUser, User, UserChanges};

/// Persistence of users (principals).
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new active user. Fails on duplicate login or email.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by primary key, active or not.
    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact login, active or not.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Apply the present slots to an active user.
    async fn update(&self, user_id: Uuid, changes: &UserChanges) -> AppResult<Option<Uuid>>;

    /// Flip `is_active` to false on an active user.
    async fn deactivate(&self, user_id: Uuid) -> AppResult<Option<Uuid>>;

    /// Add the admin role to an active user holding neither admin nor
    /// superuser. The role check and the write are one atomic step.
    async fn grant_admin(&self, user_id: Uuid) -> AppResult<Option<Uuid>>;
}

/// Persistence of compensation records.
#[async_trait]
pub trait CompensationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a record. Fails if the user already has one or does not exist.
    async fn create(&self, data: &CreateCompensation) -> AppResult<Compensation>;

    /// Find the record owned by a user.
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Compensation>>;

    /// Find a record by primary key.
    async fn find_by_id(&self, compensation_id: Uuid) -> AppResult<Option<Compensation>>;

    /// Apply the present slots to a record.
    async fn update(
        &self,
        compensation_id: Uuid,
        changes: &CompensationChanges,
    ) -> AppResult<Option<Uuid>>;

    /// Remove a record.
    async fn delete(&self, compensation_id: Uuid) -> AppResult<Option<Uuid>>;
}
