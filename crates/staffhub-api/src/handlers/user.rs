//! User directory handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{DeleteUserResponse, ShowUser, UpdatedUserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, UserIdQuery, ValidatedJson};
use crate::state::AppState;

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<ShowUser>> {
    let user = state.user_service.create_user(req.into()).await?;
    Ok(Json(user.into()))
}

/// GET /user?user_id=
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> ApiResult<Json<ShowUser>> {
    let user = state.user_service.get_user(&auth, query.user_id).await?;
    Ok(Json(user.into()))
}

/// PATCH /user?user_id=
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserIdQuery>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UpdatedUserResponse>> {
    let updated_user_id = state
        .user_service
        .update_user(&auth, query.user_id, req.into())
        .await?;
    Ok(Json(UpdatedUserResponse { updated_user_id }))
}

/// DELETE /user?user_id=
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let deleted_user_id = state.user_service.delete_user(&auth, query.user_id).await?;
    Ok(Json(DeleteUserResponse { deleted_user_id }))
}
