//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use staffhub_core::result::AppResult;
use staffhub_entity::user::{CreateUser, Role, User, UserChanges};

use super::store_error;
use crate::store::UserStore;

/// PostgreSQL-backed user store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (user_id, login, name, surname, email, is_active, hashed_password, roles) \
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.login)
        .bind(&data.name)
        .bind(&data.surname)
        .bind(&data.email)
        .bind(&data.hashed_password)
        .bind(data.roles.to_tags())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    warn!(login = %data.login, constraint = ?db_err.constraint(), "User uniqueness violation");
                }
            }
            store_error("Failed to create user", e)
        })
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find user by id", e))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to find user by login", e))
    }

    async fn update(&self, user_id: Uuid, changes: &UserChanges) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "UPDATE users SET name = COALESCE($2, name), \
                              surname = COALESCE($3, surname), \
                              email = COALESCE($4, email), \
                              roles = COALESCE($5, roles) \
             WHERE user_id = $1 AND is_active = TRUE \
             RETURNING user_id",
        )
        .bind(user_id)
        .bind(&changes.name)
        .bind(&changes.surname)
        .bind(&changes.email)
        .bind(changes.roles.as_ref().map(|r| r.to_tags()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to update user", e))
    }

    async fn deactivate(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "UPDATE users SET is_active = FALSE \
             WHERE user_id = $1 AND is_active = TRUE \
             RETURNING user_id",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to deactivate user", e))
    }

    async fn grant_admin(&self, user_id: Uuid) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "UPDATE users SET roles = array_append(roles, $2) \
             WHERE user_id = $1 AND is_active = TRUE \
               AND NOT (roles && ARRAY[$2, $3]::TEXT[]) \
             RETURNING user_id",
        )
        .bind(user_id)
        .bind(Role::Admin.as_str())
        .bind(Role::Superuser.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to grant admin role", e))
    }
}
