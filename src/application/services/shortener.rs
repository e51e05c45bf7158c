//! URL shortening and slug resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlStore};
use crate::domain::slug::{SlugAssigner, is_reserved, is_well_formed_slug};
use crate::error::AppError;

/// Attempts made by a random assigner before giving up on collisions.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Composes a [`UrlStore`] with a [`SlugAssigner`]. Both are injected at
/// construction, so the same service runs against PostgreSQL in production
/// and an in-memory map in tests.
///
/// # Collision policy
///
/// - **Deterministic assigner**: a conflicting insert is re-read. If the slug
///   already maps to the same URL (a concurrent request won), the slug is
///   reused; otherwise two distinct URLs hashed to the same slug and the
///   request fails with [`AppError::Conflict`].
/// - **Random assigner**: a fresh slug is drawn, up to 10 attempts.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    assigner: Arc<dyn SlugAssigner>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// A trailing `/` is appended to `base_url` when missing.
    pub fn new(
        store: Arc<dyn UrlStore>,
        assigner: Arc<dyn SlugAssigner>,
        base_url: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            store,
            assigner,
            base_url,
        }
    }

    /// Returns the slug for `url`, creating a mapping if needed.
    ///
    /// With a deterministic assigner an existing mapping for the exact same
    /// URL string is reused, so repeated calls return the same slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a hash collision between distinct URLs.
    /// Returns [`AppError::Internal`] on store failures or when no free slug
    /// was found within the attempt budget.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        let deterministic = self.assigner.is_deterministic();

        if deterministic {
            match self.store.find_by_url(url).await {
                Ok(slug) => {
                    tracing::debug!(%slug, "URL already shortened");
                    return Ok(slug);
                }
                Err(StoreError::NotFound) => {}
                Err(e) => return Err(e.into()),
            }
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let slug = self.assigner.assign(url);

            if is_reserved(&slug) {
                // Hex slugs never spell a reserved word; this guards other
                // deterministic assigners, which would repeat the same slug.
                if deterministic {
                    return Err(AppError::conflict(
                        "URL maps to a reserved slug",
                        json!({ "slug": slug }),
                    ));
                }
                continue;
            }

            let mapping = UrlMapping::new(slug, url);
            match self.store.insert(&mapping).await {
                Ok(()) => {
                    tracing::info!(slug = %mapping.slug, url, "Shortened URL");
                    return Ok(mapping.slug);
                }
                Err(StoreError::Conflict { slug }) if deterministic => {
                    return self.settle_hash_conflict(slug, url).await;
                }
                Err(StoreError::Conflict { slug }) => {
                    tracing::warn!(attempt, %slug, "Slug collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Returns the original URL for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        if !is_well_formed_slug(slug) || is_reserved(slug) {
            return Err(not_found(slug));
        }

        match self.store.get(slug).await {
            Ok(url) => Ok(url),
            Err(StoreError::NotFound) => Err(not_found(slug)),
            Err(e) => Err(e.into()),
        }
    }

    /// Builds the public short URL for `slug`.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}{}", self.base_url, slug)
    }

    /// Checks that the underlying store is reachable.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    async fn settle_hash_conflict(&self, slug: String, url: &str) -> Result<String, AppError> {
        match self.store.get(&slug).await {
            Ok(existing) if existing == url => {
                tracing::debug!(%slug, "Concurrent shorten of the same URL");
                Ok(slug)
            }
            Ok(_) => {
                tracing::warn!(%slug, url, "Hash collision with a different URL");
                Err(AppError::conflict(
                    "Slug already maps to a different URL",
                    json!({ "slug": slug }),
                ))
            }
            Err(StoreError::NotFound) => Err(AppError::internal(
                "Slug conflict could not be resolved",
                json!({ "slug": slug }),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

fn not_found(slug: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "slug": slug }))
}
