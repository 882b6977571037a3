// --- File: crates/tito_api/src/ticket_service.rs ---
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::client::{require_data, RequestMethod, TitoClient};
use crate::error::TitoError;

/// Lists the tickets issued for an event.
#[derive(Clone)]
pub struct TicketService {
    client: Arc<TitoClient>,
}

impl TicketService {
    pub fn new(client: Arc<TitoClient>) -> Self {
        Self { client }
    }

    pub async fn get_tickets(&self, account: &str, event: &str) -> Result<Value, TitoError> {
        info!("Looking up Tito tickets for {}/{}", account, event);
        let path = format!("{}/{}/tickets", account, event);
        let response = self.client.request(RequestMethod::Get, &path, None).await?;
        require_data(response)
    }
}
