//! Record store selection.

use std::sync::Arc;

use tracing::info;

use staffhub_core::config::{DatabaseConfig, StoreProvider};
use staffhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{CompensationRepository, UserRepository};
use crate::store::{CompensationStore, UserStore};

/// Handle to the configured record store.
///
/// The backend is chosen once at construction from `database.provider`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    users: Arc<dyn UserStore>,
    compensations: Arc<dyn CompensationStore>,
    pool: Option<DatabasePool>,
}

impl RecordStore {
    /// Build the store described by the configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                info!("Using PostgreSQL record store");
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Using in-memory record store");
                Ok(Self::memory())
            }
        }
    }

    /// Store backed by an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            compensations: Arc::new(CompensationRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory store.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            compensations: Arc::new(store),
            pool: None,
        }
    }

    /// User persistence.
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    /// Compensation persistence.
    pub fn compensations(&self) -> &dyn CompensationStore {
        self.compensations.as_ref()
    }

    /// The PostgreSQL pool, when that backend is in use.
    pub fn pg_pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
