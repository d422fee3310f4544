//! Database migration runner.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;

use crate::repositories::store_error;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// One embedded migration and whether the database has applied it.
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Migration version (timestamp prefix of the file name).
    pub version: i64,
    /// Human-readable description from the file name.
    pub description: String,
    /// Whether the migration is recorded as successfully applied.
    pub applied: bool,
}

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Compare the embedded migrations with the ones recorded in the database.
pub async fn migration_status(pool: &PgPool) -> AppResult<Vec<MigrationStatus>> {
    let table: Option<String> =
        sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations')::text")
            .fetch_one(pool)
            .await
            .map_err(|e| store_error("Failed to inspect migration table", e))?;

    // Nothing has ever been applied to a fresh database.
    let applied: Vec<i64> = match table {
        Some(_) => sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await
            .map_err(|e| store_error("Failed to read applied migrations", e))?,
        None => Vec::new(),
    };

    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}
