//! Request extractors whose rejections render as `{ "error": ... }` like every other failure.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Malformed JSON or a field of the wrong shape is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for FormJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
