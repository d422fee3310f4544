//! In-memory record store for single-process deployments and tests.
//!
//! Enforces the same uniqueness rules as the PostgreSQL schema: unique
//! login, unique email, and at most one compensation record per user.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_entity::compensation::{Compensation, CompensationChanges, CreateCompensation};
use staffhub_entity::user::{CreateUser, User, UserChanges};

use crate::store::{CompensationStore, UserStore};

#[derive(Debug, Default)]
struct InnerState {
    users: HashMap<Uuid, User>,
    compensations: HashMap<Uuid, Compensation>,
}

impl InnerState {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.user_id) != except)
    }
}

fn duplicate_key(constraint: &str) -> AppError {
    AppError::database(format!(
        "Database error: duplicate key value violates unique constraint \"{constraint}\""
    ))
}

/// Record store holding all rows in process memory.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.login == data.login) {
            return Err(duplicate_key("users_login_key"));
        }
        if state.email_taken(&data.email, None) {
            return Err(duplicate_key("users_email_key"));
        }

        let user = User {
            user_id: Uuid::new_v4(),
            login: data.login.clone(),
            name: data.name.clone(),
            surname: data.surname.clone(),
            email: data.email.clone(),
            is_active: true,
            hashed_password: data.hashed_password.clone(),
            roles: data.roles.clone(),
        };
        state.users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&user_id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.login == login).cloned())
    }

    async fn update(&self, user_id: Uuid, changes: &UserChanges) -> AppResult<Option<Uuid>> {
        let mut state = self.state.write().await;

        if !state.users.get(&user_id).is_some_and(|u| u.is_active) {
            return Ok(None);
        }
        if let Some(email) = &changes.email {
            if state.email_taken(email, Some(user_id)) {
                return Err(duplicate_key("users_email_key"));
            }
        }

        Ok(state.users.get_mut(&user_id).map(|user| {
            changes.apply_to(user);
            user.user_id
        }))
    }

    async fn deactivate(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        let mut state = self.state.write().await;
        Ok(state
            .users
            .get_mut(&user_id)
            .filter(|u| u.is_active)
            .map(|user| {
                user.is_active = false;
                user.user_id
            }))
    }

    async fn grant_admin(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        let mut state = self.state.write().await;
        Ok(state
            .users
            .get_mut(&user_id)
            .filter(|u| u.is_active && !u.roles.is_elevated())
            .map(|user| {
                user.roles = user.roles.with_admin();
                user.user_id
            }))
    }
}

#[async_trait]
impl CompensationStore for MemoryStore {
    async fn create(&self, data: &CreateCompensation) -> AppResult<Compensation> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&data.user_id) {
            return Err(AppError::database(format!(
                "Database error: user {} referenced by compensation does not exist",
                data.user_id
            )));
        }
        if state
            .compensations
            .values()
            .any(|c| c.user_id == data.user_id)
        {
            return Err(duplicate_key("compensations_user_id_key"));
        }

        let record = Compensation {
            compensation_id: Uuid::new_v4(),
            user_id: data.user_id,
            amount: data.amount,
            next_review_date: data.next_review_date.clone(),
        };
        state
            .compensations
            .insert(record.compensation_id, record.clone());
        Ok(record)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Compensation>> {
        let state = self.state.read().await;
        Ok(state
            .compensations
            .values()
            .find(|c| c.user_id == user_id)
            .cloned())
    }

    async fn find_by_id(&self, compensation_id: Uuid) -> AppResult<Option<Compensation>> {
        Ok(self
            .state
            .read()
            .await
            .compensations
            .get(&compensation_id)
            .cloned())
    }

    async fn update(
        &self,
        compensation_id: Uuid,
        changes: &CompensationChanges,
    ) -> AppResult<Option<Uuid>> {
        let mut state = self.state.write().await;
        Ok(state
            .compensations
            .get_mut(&compensation_id)
            .map(|record| {
                changes.apply_to(record);
                record.compensation_id
            }))
    }

    async fn delete(&self, compensation_id: Uuid) -> AppResult<Option<Uuid>> {
        let mut state = self.state.write().await;
        Ok(state
            .compensations
            .remove(&compensation_id)
            .map(|record| record.compensation_id))
    }
}
