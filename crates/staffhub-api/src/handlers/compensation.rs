//! Compensation record handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{CreateSalaryRequest, UpdateSalaryRequest};
use crate::dto::response::{DeleteSalaryInfoResponse, ShowSalaryInfo, UpdatedSalaryInfoResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, QueryParams, SalaryIdQuery, ValidatedJson};
use crate::state::AppState;

/// POST /user/salary
pub async fn create_salary_info(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSalaryRequest>,
) -> ApiResult<Json<ShowSalaryInfo>> {
    let record = state.compensation_service.create(&auth, req.into()).await?;
    Ok(Json(record.into()))
}

/// GET /user/salary
pub async fn get_own_salary_info(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ShowSalaryInfo>> {
    let record = state.compensation_service.get_own(&auth).await?;
    Ok(Json(record.into()))
}

/// PATCH /user/salary?salary_id=
pub async fn update_salary_info(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SalaryIdQuery>,
    ValidatedJson(req): ValidatedJson<UpdateSalaryRequest>,
) -> ApiResult<Json<UpdatedSalaryInfoResponse>> {
    let updated_salary_id = state
        .compensation_service
        .update(&auth, query.salary_id, req.into())
        .await?;
    Ok(Json(UpdatedSalaryInfoResponse { updated_salary_id }))
}

/// DELETE /user/salary?salary_id=
pub async fn delete_salary_info(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<SalaryIdQuery>,
) -> ApiResult<Json<DeleteSalaryInfoResponse>> {
    let deleted_salary_id = state
        .compensation_service
        .delete(&auth, query.salary_id)
        .await?;
    Ok(Json(DeleteSalaryInfoResponse { deleted_salary_id }))
}
