// handlers/protected/auth/whoami.rs - GET /api/auth/whoami handler

use axum::extract::{Extension, State};

use crate::database::models::UserProfile;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/auth/whoami - Profile of the user the bearer token was issued to
pub async fn whoami_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<UserProfile> {
    tracing::debug!(user_id = user.id, email = %user.email, "Whoami");
    let profile = state.auth.whoami(user.id).await?;
    Ok(ApiResponse::success(profile))
}
