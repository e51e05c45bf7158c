//! CLI administration tool for slugger.
//!
//! Talks to the PostgreSQL store directly, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the schema (same migrations the server applies at startup)
//! cargo run --bin admin -- db migrate
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Show where a slug points
//! cargo run --bin admin -- lookup 1a2b3c
//!
//! # Shorten a URL with the configured strategy
//! cargo run --bin admin -- shorten https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `slugger::config`). `STORE_BACKEND` must be `postgres`.

use slugger::application::services::ShortenerService;
use slugger::config::{self, Config, SlugStrategy, StoreBackend};
use slugger::domain::repositories::{StoreError, UrlStore};
use slugger::domain::slug::{HashSlugAssigner, RandomSlugAssigner, SlugAssigner};
use slugger::infrastructure::persistence::{PgUrlStore, connect_with_retry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing slugger.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// Look up the original URL of a slug
    Lookup {
        /// Slug to resolve
        slug: String,
    },

    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        anyhow::bail!("The admin tool requires STORE_BACKEND=postgres");
    }

    let pool = connect_with_retry(&config).await?;
    let store = Arc::new(PgUrlStore::new(Arc::new(pool)));

    match cli.command {
        Commands::Stats => handle_stats(store.as_ref()).await?,
        Commands::Lookup { slug } => handle_lookup(store.as_ref(), &slug).await?,
        Commands::Shorten { url } => handle_shorten(store, &config, &url).await?,
        Commands::Db { action } => handle_db_action(action, store.as_ref()).await?,
    }

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(store: &PgUrlStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints the original URL a slug redirects to.
async fn handle_lookup(store: &PgUrlStore, slug: &str) -> Result<()> {
    match store.get(slug).await {
        Ok(url) => {
            println!("  {} → {}", slug.cyan(), url.bright_white());
            Ok(())
        }
        Err(StoreError::NotFound) => {
            println!("{}", format!("⚠️  No mapping for '{slug}'").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Shortens a URL through the same service the HTTP API uses.
async fn handle_shorten(store: Arc<PgUrlStore>, config: &Config, url: &str) -> Result<()> {
    slugger::utils::url_validator::validate_http_url(url)
        .map_err(|e| anyhow::anyhow!("Invalid URL: {}", e))?;

    let assigner: Arc<dyn SlugAssigner> = match config.slug_strategy {
        SlugStrategy::Hash => Arc::new(HashSlugAssigner::new()),
        SlugStrategy::Random => Arc::new(RandomSlugAssigner::from_os_rng()),
    };
    let service = ShortenerService::new(store, assigner, config.base_url.clone());

    let slug = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Shortened".green().bold());
    println!("  {}", service.short_url(&slug).bright_yellow());
    println!();

    Ok(())
}

/// Dispatches database maintenance commands.
async fn handle_db_action(action: DbAction, store: &PgUrlStore) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("  Checking database connection... ");
            store
                .ping()
                .await
                .context("Database is not reachable")?;
            println!("{}", "OK".green().bold());
        }
        DbAction::Migrate => {
            print!("  Applying migrations... ");
            store
                .migrate()
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "OK".green().bold());
        }
    }

    Ok(())
}
