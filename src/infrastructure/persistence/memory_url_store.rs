//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlStore};

#[derive(Debug, Default)]
struct Maps {
    by_slug: HashMap<String, String>,
    /// First slug assigned to each URL.
    by_url: HashMap<String, String>,
}

/// Map-backed store used as a test double and for database-free local runs.
///
/// Mirrors the PostgreSQL semantics: inserting an existing slug is a
/// [`StoreError::Conflict`], nothing is ever overwritten.
#[derive(Debug, Default)]
pub struct MemoryUrlStore {
    inner: RwLock<Maps>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), StoreError> {
        let mut maps = self.inner.write().await;

        if maps.by_slug.contains_key(&mapping.slug) {
            return Err(StoreError::Conflict {
                slug: mapping.slug.clone(),
            });
        }

        maps.by_slug
            .insert(mapping.slug.clone(), mapping.original_url.clone());
        maps.by_url
            .entry(mapping.original_url.clone())
            .or_insert_with(|| mapping.slug.clone());

        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<String, StoreError> {
        self.inner
            .read()
            .await
            .by_slug
            .get(slug)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<String, StoreError> {
        self.inner
            .read()
            .await
            .by_url
            .get(original_url)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.by_slug.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryUrlStore::new();

        store
            .insert(&UrlMapping::new("abc123", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(store.get("abc123").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_get_unknown_slug() {
        let store = MemoryUrlStore::new();

        let result = store.get("nope12").await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_insert_duplicate_slug_conflicts() {
        let store = MemoryUrlStore::new();
        store
            .insert(&UrlMapping::new("abc123", "https://first.com"))
            .await
            .unwrap();

        let result = store
            .insert(&UrlMapping::new("abc123", "https://second.com"))
            .await;

        assert!(matches!(result, Err(StoreError::Conflict { ref slug }) if slug == "abc123"));
        assert_eq!(store.get("abc123").await.unwrap(), "https://first.com");
    }

    #[tokio::test]
    async fn test_find_by_url() {
        let store = MemoryUrlStore::new();
        store
            .insert(&UrlMapping::new("abc123", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(
            store.find_by_url("https://example.com").await.unwrap(),
            "abc123"
        );
        assert!(matches!(
            store.find_by_url("https://other.com").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_find_by_url_is_literal() {
        let store = MemoryUrlStore::new();
        store
            .insert(&UrlMapping::new("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(store.find_by_url("https://EXAMPLE.com").await.is_err());
        assert!(store.find_by_url("https://example.com ").await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_urls_keep_first_slug() {
        let store = MemoryUrlStore::new();
        store
            .insert(&UrlMapping::new("aaaaaa", "https://example.com"))
            .await
            .unwrap();
        store
            .insert(&UrlMapping::new("bbbbbb", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(
            store.find_by_url("https://example.com").await.unwrap(),
            "aaaaaa"
        );
        assert_eq!(store.get("bbbbbb").await.unwrap(), "https://example.com");
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
