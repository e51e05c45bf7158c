//! Request extractors with [`AppError`] rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// JSON body extractor that turns every rejection into a 400.
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
/// An empty body, invalid JSON, and JSON of the wrong shape all reject with
/// [`AppError::Validation`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                "Invalid request body",
                json!({ "reason": rejection.body_text() }),
            )
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
        })
    }
}
