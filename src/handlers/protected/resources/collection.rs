use axum::extract::{Extension, State};

use crate::api::ValidatedJson;
use crate::database::models::Resource;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /{resource} - Every record owned by the caller, oldest first
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<R>> {
    let records = state.repository::<R>().list(user.id).await?;
    Ok(ApiResponse::success(records))
}

/// POST /{resource} - Create a record owned by the caller
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(fields): ValidatedJson<R::Fields>,
) -> ApiResult<R> {
    let record = state.repository::<R>().create(fields, user.id).await?;
    tracing::info!(user_id = user.id, username = %user.username, table = R::TABLE, "Record created");
    Ok(ApiResponse::created(record))
}
