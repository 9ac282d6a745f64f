// handlers/public/auth/register.rs - POST /api/register handler

use axum::extract::State;

use crate::api::ValidatedJson;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{AuthSession, Registration};
use crate::state::AppState;

/// POST /api/register - Register new user account
///
/// Expected Input:
/// ```json
/// { "username": "alice", "email": "a@x.com", "password": "p1" }
/// ```
///
/// Expected Output (201):
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiI...",
///   "token_type": "bearer",
///   "expires_in": 3600,
///   "user": { "id": 1, "username": "alice", "email": "a@x.com" }
/// }
/// ```
///
/// A taken email or username is a 400 with a message naming which one.
pub async fn register_post(
    State(state): State<AppState>,
    ValidatedJson(registration): ValidatedJson<Registration>,
) -> ApiResult<AuthSession> {
    let session = state.auth.register(registration).await?;
    Ok(ApiResponse::created(session))
}
