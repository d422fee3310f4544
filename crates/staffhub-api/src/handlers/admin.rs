//! Admin privilege handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::UpdatedUserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, UserIdQuery};
use crate::state::AppState;

/// PATCH /user/admin_privilege?user_id=
pub async fn grant_admin_privilege(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> ApiResult<Json<UpdatedUserResponse>> {
    let updated_user_id = state
        .admin_user_service
        .grant_admin(&auth, query.user_id)
        .await?;
    Ok(Json(UpdatedUserResponse { updated_user_id }))
}
