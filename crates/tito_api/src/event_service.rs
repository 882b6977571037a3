// --- File: crates/tito_api/src/event_service.rs ---
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::client::{require_data, RequestMethod, TitoClient};
use crate::error::TitoError;

/// Looks up a single event on an account.
#[derive(Clone)]
pub struct EventService {
    client: Arc<TitoClient>,
}

impl EventService {
    pub fn new(client: Arc<TitoClient>) -> Self {
        Self { client }
    }

    /// Fetches `{account}/{event}`.
    ///
    /// Returns [`TitoError::EmptyResponse`] when the API answers with an
    /// empty document. All other failures come from [`TitoClient::request`].
    pub async fn get_event(&self, account: &str, event: &str) -> Result<Value, TitoError> {
        info!("Looking up Tito event {}/{}", account, event);
        let path = format!("{}/{}", account, event);
        let response = self.client.request(RequestMethod::Get, &path, None).await?;
        require_data(response)
    }
}
