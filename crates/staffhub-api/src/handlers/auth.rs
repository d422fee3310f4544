//! Login handler.

use axum::extract::State;
use axum::Json;

use staffhub_core::error::AppError;

use crate::dto::request::LoginForm;
use crate::dto::response::TokenResponse;
use crate::error::ApiResult;
use crate::extractors::FormBody;
use crate::state::AppState;

/// POST /login/token
pub async fn login(
    State(state): State<AppState>,
    FormBody(form): FormBody<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state
        .resolver
        .authenticate(&form.username, &form.password)
        .await?
        .ok_or_else(|| AppError::authentication("Incorrect username or password"))?;

    let issued = state.jwt_encoder.issue_access_token(&user.login)?;
    tracing::info!(user_id = %user.user_id, expires_at = %issued.expires_at, "Access token issued");

    Ok(Json(TokenResponse::bearer(issued.access_token)))
}
