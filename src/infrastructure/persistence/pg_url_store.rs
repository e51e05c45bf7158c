//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlStore};
use crate::utils::db_error::is_unique_violation_on_slug;

/// PostgreSQL store backed by the `urls` table.
///
/// Slug uniqueness comes from the table's primary key, so concurrent inserts
/// need no application-level locking.
pub struct PgUrlStore {
    pool: Arc<PgPool>,
}

impl PgUrlStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations. Safe to run on every startup.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await
    }
}

#[async_trait]
impl UrlStore for PgUrlStore {
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO urls (slug, original_url) VALUES ($1, $2)")
            .bind(&mapping.slug)
            .bind(&mapping.original_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_slug(&e) {
                    StoreError::Conflict {
                        slug: mapping.slug.clone(),
                    }
                } else {
                    StoreError::Database(e)
                }
            })?;

        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT original_url FROM urls WHERE slug = $1")
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM urls WHERE original_url = $1 LIMIT 1")
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
