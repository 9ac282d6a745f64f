use async_trait::async_trait;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::api::validate::Validate;
use crate::error::ApiError;

/// `Json<T>` that also runs `T::validate`, rejecting with an `ApiError`
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::invalid_json(rejection.body_text()))?;

        value
            .validate()
            .map_err(|field_errors| ApiError::validation_error("Invalid request body", Some(field_errors)))?;

        Ok(ValidatedJson(value))
    }
}
