use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that rejects bad input before the handler runs.
///
/// A body that fails to deserialize (missing field, wrong type, invalid
/// JSON) and a body that deserializes but fails its `validator` rules both
/// surface as 400, so handlers only ever see well-formed requests.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("{}", e.body_text())))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
