//! Route definitions for the StaffHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Every user route is also mounted with a trailing slash.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{MethodRouter, get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(login_routes())
        .merge(user_routes())
        .merge(salary_routes())
        .route("/health", get(handlers::health::health))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Mounts `route` at `path` and at `path/`.
fn with_trailing_slash(
    router: Router<AppState>,
    path: &str,
    route: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, route.clone())
        .route(&format!("{path}/"), route)
}

/// Token issue
fn login_routes() -> Router<AppState> {
    with_trailing_slash(
        Router::new(),
        "/login/token",
        post(handlers::auth::login),
    )
}

/// User directory and admin privilege
fn user_routes() -> Router<AppState> {
    let user = post(handlers::user::create_user)
        .get(handlers::user::get_user)
        .patch(handlers::user::update_user)
        .delete(handlers::user::delete_user);
    let admin = patch(handlers::admin::grant_admin_privilege);

    let router = with_trailing_slash(Router::new(), "/user", user);
    with_trailing_slash(router, "/user/admin_privilege", admin)
}

/// Compensation records
fn salary_routes() -> Router<AppState> {
    let salary = post(handlers::compensation::create_salary_info)
        .get(handlers::compensation::get_own_salary_info)
        .patch(handlers::compensation::update_salary_info)
        .delete(handlers::compensation::delete_salary_info);

    with_trailing_slash(Router::new(), "/user/salary", salary)
}
