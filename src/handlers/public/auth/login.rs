// handlers/public/auth/login.rs - POST /api/login handler

use axum::extract::State;

use crate::api::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AuthSession, Credentials};
use crate::state::AppState;

/// POST /api/login - Authenticate user and receive JWT token
///
/// Expected Input:
/// ```json
/// { "email": "a@x.com", "password": "p1" }
/// ```
///
/// Unknown email and wrong password produce the same 401 body.
pub async fn login_post(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> ApiResult<AuthSession> {
    let session = state.auth.login(credentials).await?;
    Ok(ApiResponse::success(session))
}
