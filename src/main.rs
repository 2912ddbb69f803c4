//! Pocket Ledger - Main Application Entry Point
//!
//! REST API server exposing account/pocket management and the two transfer
//! rules (account → pocket, account → account).
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. With `DATABASE_URL`: create the connection pool and run migrations;
//!    without it: use the in-memory ledger
//! 3. Build HTTP router
//! 4. Start server on configured port

use std::sync::Arc;

use pocket_ledger::{config::Config, db, ledger::MemoryLedger, ledger::PgLedger, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let app = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config.database_max_connections).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            routes::app(Arc::new(PgLedger::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, balances are kept in memory only");
            routes::app(Arc::new(MemoryLedger::new()))
        }
    };

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
