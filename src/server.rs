//! HTTP server initialization and runtime setup.
//!
//! Builds the store and slug assigner selected by [`Config`], wires them into
//! the shortener service, and runs the Axum server until a shutdown signal.

use crate::application::services::ShortenerService;
use crate::config::{Config, SlugStrategy, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::domain::slug::{HashSlugAssigner, RandomSlugAssigner, SlugAssigner};
use crate::infrastructure::persistence::{MemoryUrlStore, PgUrlStore, connect_with_retry};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The URL store (PostgreSQL with bounded connect retry and migrations,
///   or the in-memory map)
/// - The slug assigner for the configured strategy
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let assigner = build_assigner(config.slug_strategy);

    let shortener = Arc::new(ShortenerService::new(
        store,
        assigner,
        config.base_url.clone(),
    ));
    let state = AppState::new(shortener);

    let app = app_router(state, config.request_timeout_secs);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the store selected by `config.store_backend`.
async fn build_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_with_retry(config).await?;
            let store = PgUrlStore::new(Arc::new(pool));

            store
                .migrate()
                .await
                .context("Failed to apply database migrations")?;
            tracing::info!("Database schema ready");

            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Ok(Arc::new(MemoryUrlStore::new()))
        }
    }
}

fn build_assigner(strategy: SlugStrategy) -> Arc<dyn SlugAssigner> {
    match strategy {
        SlugStrategy::Hash => Arc::new(HashSlugAssigner::new()),
        SlugStrategy::Random => Arc::new(RandomSlugAssigner::from_os_rng()),
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
