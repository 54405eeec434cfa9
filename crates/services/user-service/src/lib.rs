//! User Record Service Library
//!
//! Create, update and remove user records stored in a relational database.
//! The service is a thin layer over a [`repository::UserStore`]; wire it to
//! a database with [`build_service`] or substitute any other store.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, DatabaseConfig};
use domain::{validate_input, CreateUserInput, UpdateUserInput, UserRecord};

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::DbUserStore;
use crate::service::{UserRecordManager, UserRecordService};

/// Build the record service over an open database.
pub fn build_service(db: &Database) -> Arc<dyn UserRecordService> {
    let store = Arc::new(DbUserStore::new(db.get_connection()));
    Arc::new(UserRecordManager::new(store))
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction, config: &DatabaseConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(config).await?;

    let result = apply_migration(&db, action).await;
    db.close().await?;
    result
}

async fn apply_migration(db: &Database, action: MigrateAction) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// One record operation requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Create(CreateUserInput),
    Update { id: String, patch: UpdateUserInput },
    Remove { id: String },
}

impl UserAction {
    /// Check the input payload; identifiers are left to the service.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            UserAction::Create(input) => validate_input(input)?,
            UserAction::Update { patch, .. } => validate_input(patch)?,
            UserAction::Remove { .. } => {}
        }
        Ok(())
    }
}

/// Dispatch a single action to the service.
pub async fn execute_user_action(
    service: &dyn UserRecordService,
    action: UserAction,
) -> AppResult<UserRecord> {
    match action {
        UserAction::Create(input) => service.create(input).await,
        UserAction::Update { id, patch } => service.update(&id, patch).await,
        UserAction::Remove { id } => service.remove(&id).await,
    }
}

/// Validate, connect, run one action, and close the connection.
pub async fn run_user_action(
    action: UserAction,
    config: &UserServiceConfig,
) -> AppResult<UserRecord> {
    action.validate()?;

    let db = Database::connect(&config.database).await?;
    let service = build_service(&db);

    let result = execute_user_action(service.as_ref(), action).await;
    drop(service);
    db.close().await?;
    result
}
