//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug is unknown.
/// Returns 500 Internal Server Error on store failures.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener.resolve(&slug).await?;

    tracing::info!(%slug, url = %original_url, "Redirecting");

    Ok(Redirect::temporary(&original_url))
}
