//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Create a short link (other methods: 405)
//! - `GET  /health`  - Store health check
//! - `GET  /{slug}`  - Short link redirect
//!
//! Anything else answers 404 with the standard error body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, shorten_method_not_allowed,
};
use crate::api::middleware::{timeout, tracing as trace_layer};
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout_secs` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout_secs: u64) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, request_timeout_secs))
}

/// Routes and middleware without path normalization.
///
/// Used directly by the integration tests.
pub fn api_router(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).fallback(shorten_method_not_allowed),
        )
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .fallback(route_not_found)
        .with_state(state)
        .layer(timeout::layer(request_timeout_secs))
        .layer(trace_layer::layer())
}

async fn route_not_found() -> AppError {
    AppError::not_found("Short link not found", json!({}))
}
