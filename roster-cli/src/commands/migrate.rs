//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::create_pool;
use roster_server::db::migrations;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string (host, credentials, database, sslmode)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Run the users migration against the configured database
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to migrate database")?;

    pool.close().await;
    Ok(())
}
