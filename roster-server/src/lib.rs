//! roster-server: users service over PostgreSQL
//!
//! Exposes a `users` resource under `/api/v1` with list, create, read,
//! update and delete, backed by a pooled sqlx connection and an
//! idempotent schema migration run at startup.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, InMemoryUserStore, UserRepo, UserStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{User, UserId, UserPayload, ValidationError};
