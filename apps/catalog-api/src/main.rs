//! Catalog API - REST server for the product catalog

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{error, info};

mod api;
mod config;
mod openapi;

use config::{Config, StartupCheck};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Build the (lazy) connection pool with startup retry
    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // The pool is lazy, so force a round trip before serving
    match database::postgres::check_health(&db).await {
        Ok(()) => {
            info!("Database startup check passed");
            database::postgres::run_migrations::<migration::Migrator>(&db, "catalog_api")
                .await
                .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;
        }
        Err(e) => match config.db_startup {
            StartupCheck::Required => {
                return Err(eyre::eyre!("Database startup check failed: {}", e));
            }
            StartupCheck::Lenient => {
                error!(
                    "Database startup check failed, serving in degraded state: {}",
                    e
                );
            }
        },
    }

    // Build REST router
    let api_routes = api::routes(db.clone());
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Catalog API on port {}", config.server.port);

    // Run server with graceful shutdown
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            error!("Error closing database connection: {}", e);
        } else {
            info!("PostgreSQL connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
