//! HTTP server command
//!
//! Opens the pool, runs auto-migration, then serves until shutdown.
//! Any startup failure aborts before the listener is bound.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use roster_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use roster_server::{run_server, AppState, InMemoryUserStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROSTER_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string (host, credentials, database, sslmode)
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "ROSTER_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep users in process memory instead of PostgreSQL (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let state = match args.database_url.as_deref() {
        Some(database_url) if !args.in_memory => {
            let pool = create_pool_with_options(database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;

            migrations::run(&pool)
                .await
                .context("Failed to migrate database")?;

            AppState::from_pool(pool)
        }
        _ => {
            tracing::warn!("Serving from in-memory store, data is lost on exit");
            AppState::new(InMemoryUserStore::new())
        }
    };

    tracing::info!("Starting roster server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
