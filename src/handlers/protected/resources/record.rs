use axum::extract::{Extension, State};

use crate::api::{IdPath, ValidatedJson};
use crate::database::models::Resource;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

// Records owned by another user answer exactly like missing ones (404).

/// GET /{resource}/:id - Fetch one record owned by the caller
pub async fn get<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> ApiResult<R> {
    let record = state.repository::<R>().get(id, user.id).await?;
    Ok(ApiResponse::success(record))
}

/// PUT /{resource}/:id - Replace every mutable field of a record
pub async fn put<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    IdPath(id): IdPath,
    ValidatedJson(fields): ValidatedJson<R::Fields>,
) -> ApiResult<R> {
    let record = state.repository::<R>().update(id, fields, user.id).await?;
    Ok(ApiResponse::success(record))
}

/// DELETE /{resource}/:id - Remove a record
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    state.repository::<R>().delete(id, user.id).await?;
    tracing::info!(user_id = user.id, username = %user.username, table = R::TABLE, id, "Record deleted");
    Ok(ApiResponse::no_content())
}
