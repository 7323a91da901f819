//! Inventory API - REST server over the flat-file product catalog

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_inventory::{InventoryService, JsonFileStore};
use std::time::Duration;
use tracing::info;

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
        "Using inventory document at {}",
        config.store.data_path.display()
    );

    let store = JsonFileStore::new(&config.store);
    let service = InventoryService::new(store);

    // Surface storage problems (unreadable or corrupt document) at startup
    // instead of on the first request. This also bootstraps an empty
    // document on a fresh install.
    service.summary().await?;

    let state = AppState {
        config: config.clone(),
        service,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!("Starting Inventory API on port {}", state.config.server.port);

    // Run server with graceful shutdown. There are no connections to close:
    // every mutation rewrites the document before its response is sent.
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutdown: catalog document is already durable");
        },
    )
    .await?;

    info!("Inventory API shutdown complete");
    Ok(())
}
