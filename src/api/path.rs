use async_trait::async_trait;
use axum::extract::{rejection::PathRejection, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

/// Numeric `:id` path segment. A segment that is not an `i64` is rejected
/// with an `ApiError` body instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!("Rejected record id: {}", rejection.body_text());
                ApiError::bad_request("Record id must be an integer")
            })?;
        Ok(IdPath(id))
    }
}
