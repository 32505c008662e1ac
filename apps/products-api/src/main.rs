//! Products API - REST server over PostgreSQL

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );
    let db = connect_from_config_with_retry(config.database.clone(), None).await?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState { config, db };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state))
        .await?
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .merge(api::index::router(state.config.app));

    info!(port = state.config.server.port, "Starting Products API");

    let db = state.db.clone();
    create_production_app(router, &state.config.server, async move {
        info!("Shutting down: closing PostgreSQL pool");
        match db.close().await {
            Ok(()) => info!("PostgreSQL pool closed"),
            Err(e) => error!(error = %e, "Failed to close PostgreSQL pool"),
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
