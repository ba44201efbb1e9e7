//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{seed_users, Database};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Connects and applies pending migrations
    let db = Database::connect(&config).await?;

    if let Some(path) = args.seed.as_ref().or(config.seed_path.as_ref()) {
        let inserted = seed_users(db.connection(), path).await?;
        tracing::info!("Seeded {} users from {}", inserted, path.display());
    }

    let app_state = AppState::from_config(&db, &config);
    tracing::info!("HTTP status policy: {}", config.status_policy);

    let app = create_router(app_state);

    // Command-line flags win over the environment
    config.server_host = args.host;
    config.server_port = args.port;
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
