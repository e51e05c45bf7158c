//! Application layer services implementing the shortening protocol.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::shortener::ShortenerService`] - Slug assignment, persistence and lookup

pub mod services;
