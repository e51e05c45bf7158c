//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// State cloned into every request.
///
/// Holds only the shortener service; the store and its connection pool live
/// behind it.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
