//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::datasets::{self, Datasets};
use crate::infra::{Database, UserRepository, UserStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database (runs pending migrations)
    let db = Arc::new(Database::connect(&config).await);

    // Seed ABHA users on first start
    seed_users(&db, &config).await?;

    // Load the immutable concept and mapping tables
    let datasets = Arc::new(Datasets::load(&config)?);

    // Create application state
    let app_state = AppState::from_config(db, datasets, config);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Populate the users table from the seed CSV iff it is empty.
async fn seed_users(db: &Database, config: &Config) -> AppResult<()> {
    let users = UserStore::new(db.get_connection());

    if users.count().await? > 0 {
        tracing::info!("User store already seeded");
        return Ok(());
    }

    let seed = datasets::load_seed_users(&config.user_seed_csv)?;
    let total = seed.len();
    for user in seed {
        users.insert(user).await?;
    }

    tracing::info!("Seeded {} ABHA users from {}", total, config.user_seed_csv);
    Ok(())
}
