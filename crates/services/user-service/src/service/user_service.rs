//! User record service - create, update and remove user records.
//!
//! Each operation parses its identifier (if any), makes exactly one store
//! call and hands the store's answer back unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{parse_identifier, CreateUserInput, UpdateUserInput, UserRecord};

use crate::repository::UserStore;

/// User record service trait for dependency injection.
///
/// Identifiers are caller-facing strings; see [`domain::parse_identifier`]
/// for how they map to store keys. An identifier with no leading digits is
/// rejected with `InvalidIdentifier` before the store is consulted.
#[async_trait]
pub trait UserRecordService: Send + Sync {
    /// Create a record; the store assigns its id
    async fn create(&self, input: CreateUserInput) -> AppResult<UserRecord>;

    /// Apply a partial update and return the full updated record
    async fn update(&self, id: &str, patch: UpdateUserInput) -> AppResult<UserRecord>;

    /// Permanently delete a record and return its last state
    async fn remove(&self, id: &str) -> AppResult<UserRecord>;
}

/// Concrete implementation of UserRecordService over a UserStore.
pub struct UserRecordManager {
    store: Arc<dyn UserStore>,
}

impl UserRecordManager {
    /// Create new service instance with store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRecordService for UserRecordManager {
    async fn create(&self, input: CreateUserInput) -> AppResult<UserRecord> {
        tracing::debug!("Creating user record");
        self.store.insert(input).await
    }

    async fn update(&self, id: &str, patch: UpdateUserInput) -> AppResult<UserRecord> {
        let id = parse_identifier(id)?;
        tracing::debug!(id, "Updating user record");
        self.store.update_by_id(id, patch).await
    }

    async fn remove(&self, id: &str) -> AppResult<UserRecord> {
        let id = parse_identifier(id)?;
        tracing::debug!(id, "Removing user record");
        self.store.delete_by_id(id).await
    }
}
