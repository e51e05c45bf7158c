//! Store trait definitions for the domain layer.
//!
//! [`UrlStore`] is the single capability interface the service depends on.
//! Implementations live in `crate::infrastructure::persistence` and are
//! injected at construction.
//!
//! # Testing
//!
//! A `mockall` mock ([`MockUrlStore`]) is generated for unit tests; see
//! `tests/repository_url.rs` for the PostgreSQL integration tests.

pub mod url_store;

pub use url_store::{StoreError, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
