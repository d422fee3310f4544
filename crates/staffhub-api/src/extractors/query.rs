//! Query string parameters identifying the target record.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use staffhub_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::extract::Query`], but a missing or malformed parameter is a 422.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `?user_id=<uuid>`
#[derive(Debug, Clone, Deserialize)]
pub struct UserIdQuery {
    /// Target user.
    pub user_id: Uuid,
}

/// `?salary_id=<uuid>`
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryIdQuery {
    /// Target compensation record.
    pub salary_id: Uuid,
}
