//! Store trait for slug to URL mappings.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;

/// Errors surfaced by [`UrlStore`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No mapping exists for the requested key.
    ///
    /// For [`UrlStore::find_by_url`] this is the normal "not shortened yet" branch.
    #[error("mapping not found")]
    NotFound,

    /// The slug is already mapped (primary key violation).
    #[error("slug '{slug}' is already taken")]
    Conflict { slug: String },

    /// Connection loss or any other backend failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence capability for URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlStore`] - in-memory map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the slug is already taken.
    /// Returns [`StoreError::Database`] on backend failures.
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), StoreError>;

    /// Returns the original URL stored under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the slug is unknown.
    async fn get(&self, slug: &str) -> Result<String, StoreError>;

    /// Returns the slug already assigned to `original_url`.
    ///
    /// Comparison is literal string equality. When several slugs map to the
    /// same URL, any one of them may be returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the URL has not been shortened.
    async fn find_by_url(&self, original_url: &str) -> Result<String, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
