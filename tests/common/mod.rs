#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use slugger::application::services::ShortenerService;
use slugger::domain::entities::UrlMapping;
use slugger::domain::repositories::{StoreError, UrlStore};
use slugger::domain::slug::{HashSlugAssigner, RandomSlugAssigner, SlugAssigner};
use slugger::infrastructure::persistence::MemoryUrlStore;
use slugger::routes::api_router;
use slugger::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080/";

/// Store whose every operation fails like a lost connection.
pub struct UnavailableStore;

#[async_trait]
impl UrlStore for UnavailableStore {
    async fn insert(&self, _mapping: &UrlMapping) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn get(&self, _slug: &str) -> Result<String, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn find_by_url(&self, _original_url: &str) -> Result<String, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

pub fn create_test_state(store: Arc<dyn UrlStore>, assigner: Arc<dyn SlugAssigner>) -> AppState {
    AppState::new(Arc::new(ShortenerService::new(store, assigner, BASE_URL)))
}

/// Hash-strategy state over a fresh in-memory store.
pub fn hash_state(store: Arc<MemoryUrlStore>) -> AppState {
    create_test_state(store, Arc::new(HashSlugAssigner::new()))
}

/// Random-strategy state with a fixed seed.
pub fn random_state(store: Arc<MemoryUrlStore>, seed: u64) -> AppState {
    create_test_state(store, Arc::new(RandomSlugAssigner::seeded(seed)))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(api_router(state, 30)).unwrap()
}

/// Extracts the slug from a `shortened_url` value.
pub fn slug_of(shortened_url: &str) -> &str {
    shortened_url
        .strip_prefix(BASE_URL)
        .expect("shortened_url starts with the base URL")
}
