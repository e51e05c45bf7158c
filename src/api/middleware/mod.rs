//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`timeout`] - Per-request deadline

pub mod timeout;
pub mod tracing;
