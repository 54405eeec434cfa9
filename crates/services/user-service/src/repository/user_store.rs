//! User store: the persistence seam behind the record service.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QuerySelect, TransactionTrait,
};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{CreateUserInput, UpdateUserInput, UserId, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence interface for user records.
///
/// Implementations must be safe to share between concurrent callers; the
/// service adds no locking of its own.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record and return it with its generated id
    async fn insert(&self, fields: CreateUserInput) -> AppResult<UserRecord>;

    /// Write the present fields of `patch` and return the updated record
    async fn update_by_id(&self, id: UserId, patch: UpdateUserInput) -> AppResult<UserRecord>;

    /// Delete the record and return its last state
    async fn delete_by_id(&self, id: UserId) -> AppResult<UserRecord>;
}

/// SeaORM-backed implementation of UserStore
pub struct DbUserStore {
    db: Arc<DatabaseConnection>,
}

impl DbUserStore {
    /// Create new store over a shared connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for DbUserStore {
    async fn insert(&self, fields: CreateUserInput) -> AppResult<UserRecord> {
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(fields.email),
            name: Set(fields.name),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(UserRecord::from(model))
    }

    async fn update_by_id(&self, id: UserId, patch: UpdateUserInput) -> AppResult<UserRecord> {
        // Nothing to write; answer with the current row
        if patch.is_empty() {
            return UserEntity::find_by_id(id)
                .one(self.db.as_ref())
                .await?
                .map(UserRecord::from)
                .ok_or_not_found();
        }

        let mut active = ActiveModel {
            id: Unchanged(id),
            email: NotSet,
            name: NotSet,
        };
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(name) = patch.name {
            active.name = Set(name);
        }

        let model = active.update(self.db.as_ref()).await.map_err(not_found_or_db)?;
        Ok(UserRecord::from(model))
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<UserRecord> {
        let txn = self.db.begin().await?;

        match delete_locked(&txn, id).await {
            Ok(record) => {
                txn.commit().await?;
                Ok(record)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(id, "Failed to rollback delete: {:?}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

/// Lock the row, then delete it, so the returned state is the one removed.
async fn delete_locked(txn: &DatabaseTransaction, id: UserId) -> AppResult<UserRecord> {
    let model = UserEntity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or_not_found()?;

    let result = UserEntity::delete_by_id(id)
        .exec(txn)
        .await
        .map_err(AppError::from)?;

    // Nothing deleted means nothing to return
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(UserRecord::from(model))
}

/// An UPDATE that matched no row is a missing record, not a store fault.
fn not_found_or_db(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::from(other),
    }
}
