//! Employee Service Library
//!
//! Persistence, validation and use cases for employee records. The gateway
//! embeds it in-process; the `employee-service` binary only drives
//! migrations.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;
pub mod validation;

use std::sync::Arc;

use tracing::info;

use crate::config::EmployeeServiceConfig;
use crate::infra::{Database, Persistence};
use crate::service::{EmployeeManager, EmployeeService};

/// Build the employee service on top of an open database.
pub fn employee_service(db: &Database) -> Arc<dyn EmployeeService> {
    let uow = Arc::new(Persistence::new(db.get_connection()));
    Arc::new(EmployeeManager::new(uow))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = EmployeeServiceConfig::from_env();
    run_migrations_with(&Database::connect_without_migrations(&config.database).await?, action)
        .await
}

/// Run a migration action against an already open database.
pub async fn run_migrations_with(
    db: &Database,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
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
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
