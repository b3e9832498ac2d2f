//! Domain models with validation at construction
//!
//! Request input is checked when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{User, UserId, UserPayload};
pub use validation::ValidationError;
