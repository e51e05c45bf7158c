//! HTTP layer: request/response handling for the public endpoints.
//!
//! This layer translates HTTP requests into shortener operations and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Extractors that reject with [`crate::error::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and timeout layers

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
