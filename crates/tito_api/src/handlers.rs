// --- File: crates/tito_api/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    response::{Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tito_common::{map_json_error, AppError, DiagnosticLogger, MessageQueue, Notifier, UserMessage};
use tito_config::ConfigSource;

use crate::client::TitoClient;
use crate::event_service::EventService;
use crate::ticket_service::TicketService;

// --- State for Tito Handlers ---
// Both services share one client; the queue is the client's notifier.
#[derive(Clone)]
pub struct TitoState {
    pub events: EventService,
    pub tickets: TicketService,
    pub messages: Arc<MessageQueue>,
}

impl TitoState {
    pub fn new(client: Arc<TitoClient>, messages: Arc<MessageQueue>) -> Self {
        Self {
            events: EventService::new(client.clone()),
            tickets: TicketService::new(client),
            messages,
        }
    }

    /// Builds the client from `settings` and wires a fresh message queue into it.
    pub fn from_settings(settings: &dyn ConfigSource, logger: Arc<dyn DiagnosticLogger>) -> Self {
        let messages = Arc::new(MessageQueue::new());
        let notifier: Arc<dyn Notifier> = messages.clone();
        let client = Arc::new(TitoClient::from_source(settings, logger, notifier));
        Self::new(client, messages)
    }
}

/// Axum handler returning the raw event document.
#[axum::debug_handler]
pub async fn get_event_handler(
    State(state): State<Arc<TitoState>>,
    Path((account, event)): Path<(String, String)>,
) -> Result<Json<Value>, Response> {
    map_json_error(state.events.get_event(&account, &event).await, AppError::from)
}

/// Axum handler returning the raw ticket list document.
#[axum::debug_handler]
pub async fn get_tickets_handler(
    State(state): State<Arc<TitoState>>,
    Path((account, event)): Path<(String, String)>,
) -> Result<Json<Value>, Response> {
    map_json_error(state.tickets.get_tickets(&account, &event).await, AppError::from)
}

/// Hands pending user messages to the caller and clears the queue.
#[axum::debug_handler]
pub async fn list_messages_handler(State(state): State<Arc<TitoState>>) -> Json<Vec<UserMessage>> {
    Json(state.messages.drain())
}
