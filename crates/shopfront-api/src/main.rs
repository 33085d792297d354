//! Shopfront API Server
//!
//! REST API server backing the storefront catalog page.

use shopfront_api::{create_router, state::AppState};
use shopfront_core::AppConfig;
use shopfront_index::UpstashStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopfront_api=debug,tower_http=debug".into()),
        )
        .init();

    // Load configuration: defaults, then the TOML file named by
    // SHOPFRONT_CONFIG (when set), then environment overrides
    let config = AppConfig::load()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state
    let state = Arc::new(AppState::new(config));

    // Connect the vector index when configured; without it the server
    // still comes up but reports not-ready and fails catalog queries
    match UpstashStore::new(&state.config.index) {
        Ok(store) => state.initialize_index(Arc::new(store)).await,
        Err(err) => tracing::warn!(error = %err, "running without a product index"),
    }

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Shopfront API starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
