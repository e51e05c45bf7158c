//! Database pool construction with a bounded startup retry.

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::config::Config;

/// Connects to PostgreSQL, retrying a fixed number of times with a fixed delay.
///
/// `config.db_connect_retries` is the total number of attempts. Each attempt
/// opens the pool, which establishes and checks one connection.
///
/// # Errors
///
/// Returns an error if no database URL is configured, or the last connection
/// error once the retry budget is exhausted.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

    let attempts = config.db_connect_retries;
    let strategy = FixedInterval::new(Duration::from_secs(config.db_retry_delay_secs))
        .take(attempts.saturating_sub(1) as usize);

    let mut attempt = 0u32;
    Retry::start(strategy, || {
        attempt += 1;
        let current = attempt;
        let options = options.clone();
        let url = database_url.to_string();

        async move {
            match options.connect(&url).await {
                Ok(pool) => {
                    tracing::info!(attempt = current, "Connected to database");
                    Ok(pool)
                }
                Err(e) => {
                    tracing::warn!(
                        attempt = current,
                        max_attempts = attempts,
                        error = %e,
                        "Database connection failed"
                    );
                    Err(e)
                }
            }
        }
    })
    .await
    .with_context(|| format!("Failed to connect to database after {attempts} attempt(s)"))
}
