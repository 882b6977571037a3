// File: services/tito_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tito_api::{routes as tito_routes, TitoState};
use tito_common::{logging, TracingLogger};
use tito_config::load_config;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = logging::log_result(
        load_config(),
        "Configuration loaded",
        "Failed to load configuration",
    )?;

    if config.tito.api_token.is_empty() {
        info!("No Tito API token configured; lookups will ask the user to set one");
    }

    // One client for the whole process; the queue collects user messages.
    let state = Arc::new(TitoState::from_settings(
        &config.tito,
        Arc::new(TracingLogger),
    ));

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Tito API!" }))
        .merge(tito_routes(state));

    let app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
