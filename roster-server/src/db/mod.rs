//! Database layer - connection pool, migrations and the user store
//!
//! # Design Principles
//!
//! - One pool opened at startup and passed to handlers through state
//! - Every operation is a single statement, auto-committed
//! - Rely on `RETURNING` and `rows_affected`, no check-then-write

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use memory::InMemoryUserStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
