//! Application builder: wires state, router and middleware into an Axum app.

use std::sync::Arc;

use axum::Router;

use staffhub_auth::jwt::{JwtDecoder, JwtEncoder};
use staffhub_auth::password::PasswordHasher;
use staffhub_auth::rbac::RbacEnforcer;
use staffhub_auth::resolver::PrincipalResolver;
use staffhub_core::config::AppConfig;
use staffhub_core::error::AppError;
use staffhub_core::result::AppResult;
use staffhub_database::RecordStore;
use staffhub_service::compensation::CompensationService;
use staffhub_service::user::{AdminUserService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state from configuration and an open record store.
///
/// Fails when the auth section is unusable (unknown algorithm, bad
/// argon2 parameters).
pub fn build_state(config: AppConfig, store: RecordStore) -> AppResult<AppState> {
    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let jwt_decoder = JwtDecoder::new(&config.auth)?;
    let rbac = Arc::new(RbacEnforcer::new());
    let resolver = Arc::new(PrincipalResolver::new(
        store.clone(),
        hasher.as_ref().clone(),
        jwt_decoder,
    ));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        store.clone(),
        Arc::clone(&hasher),
        Arc::clone(&rbac),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        store.clone(),
        Arc::clone(&hasher),
        Arc::clone(&rbac),
    ));
    let compensation_service = Arc::new(CompensationService::new(store.clone(), rbac));

    Ok(AppState {
        config: Arc::new(config),
        store,
        jwt_encoder,
        resolver,
        user_service,
        admin_user_service,
        compensation_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Connects the record store and serves HTTP until Ctrl+C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!(provider = %config.database.provider, "Starting StaffHub server...");

    let store = RecordStore::connect(&config.database).await?;
    let addr = config.server.bind_address();
    let state = build_state(config, store.clone())?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("StaffHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    store.close().await;
    tracing::info!("StaffHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
