//! Migrate command - Runs database schema migrations.

use crate::cli::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(AppError::from)?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations applied");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback complete");
        }
        MigrateAction::Status => {
            let migrations = db.migration_status().await?;
            for (name, applied) in migrations {
                let marker = if applied { "applied" } else { "pending" };
                println!("{:<60} {}", name, marker);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and reapplying all migrations");
            db.fresh_migrations().await?;
            tracing::info!("Database reset complete");
        }
    }

    Ok(())
}
