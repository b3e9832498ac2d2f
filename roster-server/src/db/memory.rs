//! In-memory user store
//!
//! Same contract as `UserRepo`: ids start at 1, are never reused, and
//! list returns rows in id order. Intended for tests and local runs.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use super::{DbError, UserStore};
use crate::models::{User, UserId, UserPayload};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: Vec<User>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl Table {
    fn position(&self, id: UserId) -> Option<usize> {
        self.rows.iter().position(|u| u.id == id.get())
    }
}

/// `UserStore` backed by a vector behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.clone())
    }

    async fn create(&self, payload: UserPayload) -> Result<User, DbError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let user = User {
            id: table.next_id,
            name: payload.name,
            email: payload.email,
        };
        table.next_id += 1;
        // Ids only grow, so pushing keeps rows sorted
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, DbError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table
            .position(id)
            .map(|idx| table.rows[idx].clone())
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn update(&self, id: UserId, payload: UserPayload) -> Result<User, DbError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let idx = table
            .position(id)
            .ok_or_else(|| DbError::user_not_found(id))?;

        let updated = payload.into_user(id);
        table.rows[idx] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let idx = table
            .position(id)
            .ok_or_else(|| DbError::user_not_found(id))?;

        table.rows.remove(idx);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
