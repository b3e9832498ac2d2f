//! Schema auto-migration for the users table
//!
//! Every statement is idempotent, so this runs on each boot. A table
//! created by an older build gains any column it is missing.

use sqlx::PgPool;

use super::DbError;

/// Bring the schema up to the current shape.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running users migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    add_missing_columns(pool).await?;

    tracing::info!("Users migrations complete");
    Ok(())
}

async fn add_missing_columns(pool: &PgPool) -> Result<(), DbError> {
    for column in ["name", "email"] {
        // Default backfills existing rows only; fresh tables carry none
        sqlx::query(&format!(
            "ALTER TABLE users ADD COLUMN IF NOT EXISTS {column} TEXT NOT NULL DEFAULT ''"
        ))
        .execute(pool)
        .await?;
        sqlx::query(&format!("ALTER TABLE users ALTER COLUMN {column} DROP DEFAULT"))
            .execute(pool)
            .await?;
    }

    Ok(())
}
