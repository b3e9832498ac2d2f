//! User entity and request types
//!
//! `User` is both the stored row and the wire representation.
//! `UserPayload` is the strict body accepted by create and update.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// User record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Assigned by storage on insert, never changes
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Both fields are required and unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach an identifier, producing the record this payload describes.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id: id.get(),
            name: self.name,
            email: self.email,
        }
    }
}

/// Validated user identifier (strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Create an identifier, rejecting zero and negative values.
    ///
    /// # Example
    /// ```
    /// use roster_server::models::UserId;
    ///
    /// assert!(UserId::new(1).is_ok());
    /// assert!(UserId::new(0).is_err());
    /// ```
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a positive integer",
            });
        }
        Ok(Self(id))
    }

    /// Parse an identifier from a path segment.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        let id = s.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be a positive integer",
        })?;

        Self::new(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        assert_eq!(UserId::parse("1").unwrap().get(), 1);
        assert_eq!(UserId::parse("9001").unwrap().get(), 9001);
        assert_eq!(UserId::new(i64::MAX).unwrap().get(), i64::MAX);
    }

    #[test]
    fn invalid_ids() {
        assert_eq!(
            UserId::parse(""),
            Err(ValidationError::Empty { field: "id" })
        );
        assert!(UserId::parse("0").is_err());
        assert!(UserId::parse("-3").is_err());
        assert!(UserId::parse("abc").is_err());
        assert!(UserId::parse("1.5").is_err());
        assert!(UserId::parse("99999999999999999999").is_err());
    }

    #[test]
    fn payload_requires_both_fields() {
        let err = serde_json::from_str::<UserPayload>(r#"{"name": "Eve"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `email`"));
    }

    #[test]
    fn payload_rejects_unknown_fields() {
        let err = serde_json::from_str::<UserPayload>(
            r#"{"name": "Eve", "email": "eve@example.com", "role": "admin"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `role`"));
    }

    #[test]
    fn payload_rejects_mistyped_fields() {
        assert!(serde_json::from_str::<UserPayload>(r#"{"name": 7, "email": "x"}"#).is_err());
    }

    #[test]
    fn user_wire_format() {
        let user = UserPayload::new("Alice", "alice@example.com").into_user(UserId::new(3).unwrap());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Alice", "email": "alice@example.com"})
        );
    }
}
