// --- File: crates/tito_api/src/routes.rs ---

use crate::handlers::{get_event_handler, get_tickets_handler, list_messages_handler, TitoState};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the Tito feature.
pub fn routes(state: Arc<TitoState>) -> Router {
    Router::new()
        .route("/tito/messages", get(list_messages_handler))
        .route("/tito/{account}/{event}", get(get_event_handler))
        .route("/tito/{account}/{event}/tickets", get(get_tickets_handler))
        .with_state(state)
}
