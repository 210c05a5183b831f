//! Credential store.
//!
//! Owns the `users` table: SeaORM entity, schema migrations, and the
//! [`CredentialStore`] trait the services depend on. The concrete
//! [`SqlCredentialStore`] is constructed once at startup and injected into
//! each service; nothing in this crate holds process-wide state.

pub mod credential_store;
pub mod db;
pub mod entities;
pub mod migrations;

pub use credential_store::{CredentialStore, SqlCredentialStore};
pub use db::Database;
pub use migrations::Migrator;

#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::MockCredentialStore;

use tracing::info;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(database_url).await?;

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
