//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{Method, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortened_url": "http://localhost:8080/abc123" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is missing, malformed, or `url` is empty or
///   not an absolute HTTP(S) URL. No mapping is created.
/// - 409 Conflict on a hash collision with a different URL.
/// - 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let slug = state.shortener.shorten(&payload.url).await?;
    let shortened_url = state.shortener.short_url(&slug);

    Ok(Json(ShortenResponse { shortened_url }))
}

/// Rejects every method other than `POST` on `/shorten`.
///
/// Responds 405 with the standard error body and an `Allow: POST` header.
pub async fn shorten_method_not_allowed(method: Method) -> impl IntoResponse {
    tracing::debug!(%method, "Method not supported on /shorten");

    (
        [(header::ALLOW, "POST")],
        AppError::method_not_allowed(
            "Method is not supported",
            json!({ "method": method.as_str(), "allowed": ["POST"] }),
        ),
    )
}
