//! Repository implementations for database access
//!
//! `UserStore` is the seam handlers depend on. `UserRepo` issues SQL
//! against PostgreSQL; `InMemoryUserStore` backs tests and `--in-memory`.

pub mod users;

pub use users::{DbError, UserRepo, UserStore};
