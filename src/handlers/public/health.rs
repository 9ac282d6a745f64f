use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - banner
pub async fn root_get() -> Json<Value> {
    Json(json!({
        "message": "Personal Productivity Dashboard API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - liveness plus a database ping
pub async fn health_get(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "ok",
                "timestamp": now,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "database": "unavailable",
                    "timestamp": now,
                })),
            )
        }
    }
}
