//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`]. It is created on the first
//! successful shorten request and never updated or deleted afterwards.

pub mod url_mapping;

pub use url_mapping::UrlMapping;
