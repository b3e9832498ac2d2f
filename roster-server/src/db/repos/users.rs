//! User repository
//!
//! Handles user CRUD with single-statement queries:
//! - list: explicit ORDER BY id (creation order)
//! - update: UPDATE ... RETURNING, absent row is NotFound
//! - delete: rows_affected == 0 is NotFound

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{User, UserId, UserPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }
}

/// Persistence operations the HTTP handlers rely on.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// Insert a user and return it with its assigned id.
    async fn create(&self, payload: UserPayload) -> Result<User, DbError>;

    async fn get(&self, id: UserId) -> Result<User, DbError>;

    /// Replace both fields of an existing user.
    async fn update(&self, id: UserId, payload: UserPayload) -> Result<User, DbError>;

    /// Hard delete. Deleting an absent id is NotFound.
    async fn delete(&self, id: UserId) -> Result<(), DbError>;

    /// Cheap reachability check for the backing storage.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL user repository
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create(&self, payload: UserPayload) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn update(&self, id: UserId, payload: UserPayload) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id.get())
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
