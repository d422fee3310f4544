//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use staffhub_auth::jwt::JwtEncoder;
use staffhub_auth::resolver::PrincipalResolver;
use staffhub_core::config::AppConfig;
use staffhub_database::RecordStore;
use staffhub_service::compensation::CompensationService;
use staffhub_service::user::{AdminUserService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Cloning is cheap;
/// everything inside is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Record store (PostgreSQL or in-memory)
    pub store: RecordStore,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token issuer
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Token and credential to user resolution
    pub resolver: Arc<PrincipalResolver>,

    // ── Services ─────────────────────────────────────────────
    /// User directory service
    pub user_service: Arc<UserService>,
    /// Admin privilege service
    pub admin_user_service: Arc<AdminUserService>,
    /// Compensation record service
    pub compensation_service: Arc<CompensationService>,
}
