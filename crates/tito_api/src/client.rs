// --- File: crates/tito_api/src/client.rs ---
//! Authenticated HTTP client for the Tito API.
//!
//! Every outbound call goes through [`TitoClient::request`]. The client holds
//! only immutable settings, so one instance can be shared behind an `Arc`.

use std::fmt;
use std::sync::Arc;

use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client, Method, StatusCode,
};
use serde_json::Value;
use tito_common::{logging::error_chain, DiagnosticLogger, Notifier, UserMessage, HTTP_CLIENT};
use tito_config::{ConfigSource, DEFAULT_SETTINGS_PATH, TITO_API_TOKEN, TITO_API_URL, TITO_SETTINGS_PATH};
use tracing::debug;

use crate::error::TitoError;

/// Diagnostic channel for transport failures.
pub const LOG_CHANNEL: &str = "tito";

/// HTTP methods the client issues. The integration is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
}

impl From<RequestMethod> for Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => Method::GET,
        }
    }
}

/// One outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: RequestMethod,
    /// Appended verbatim to the base URL.
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
}

impl RequestSpec {
    pub fn new(method: RequestMethod, path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path, None)
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Full request URL. No escaping or normalisation is applied.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url, self.path);
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

/// Connection settings, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct TitoConfig {
    pub base_url: String,
    pub api_token: String,
}

impl TitoConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Reads `tito_api_url` and `tito_api_token`; missing keys become empty.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            base_url: source.get(TITO_API_URL).unwrap_or_default(),
            api_token: source.get(TITO_API_TOKEN).unwrap_or_default(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }
}

// The token stays out of Debug output and therefore out of logs.
impl fmt::Debug for TitoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitoConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &if self.has_token() { "<redacted>" } else { "<unset>" })
            .finish()
    }
}

/// Client for the Tito API.
pub struct TitoClient {
    http: Client,
    config: TitoConfig,
    settings_path: String,
    logger: Arc<dyn DiagnosticLogger>,
    notifier: Arc<dyn Notifier>,
}

impl TitoClient {
    /// Creates a client using the shared HTTP client.
    pub fn new(
        config: TitoConfig,
        logger: Arc<dyn DiagnosticLogger>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            http: HTTP_CLIENT.clone(),
            config,
            settings_path: DEFAULT_SETTINGS_PATH.to_string(),
            logger,
            notifier,
        }
    }

    /// Creates a client from the host's settings store.
    pub fn from_source(
        source: &dyn ConfigSource,
        logger: Arc<dyn DiagnosticLogger>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let client = Self::new(TitoConfig::from_source(source), logger, notifier);
        match source.get(TITO_SETTINGS_PATH) {
            Some(path) if !path.is_empty() => client.with_settings_path(path),
            _ => client,
        }
    }

    /// Replaces the underlying HTTP client, e.g. to change timeouts.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Sets the settings location shown when the token is missing.
    pub fn with_settings_path(mut self, settings_path: impl Into<String>) -> Self {
        self.settings_path = settings_path.into();
        self
    }

    /// Issues `method` against `base_url + path` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// * [`TitoError::MissingToken`] when no token is configured. No request is
    ///   sent and the user is told where to set the token.
    /// * Any transport error: connection failures, a status other than
    ///   200 OK, or an undecodable body. Each is logged once on
    ///   [`LOG_CHANNEL`] with its full cause chain.
    pub async fn request(
        &self,
        method: RequestMethod,
        path: &str,
        query: Option<&str>,
    ) -> Result<Value, TitoError> {
        let spec = RequestSpec::new(method, path, query.map(str::to_string));
        self.send(&spec).await
    }

    /// Same as [`request`](Self::request) for a prepared [`RequestSpec`].
    pub async fn send(&self, spec: &RequestSpec) -> Result<Value, TitoError> {
        if !self.config.has_token() {
            self.notifier
                .notify(UserMessage::error(self.missing_token_message()));
            return Err(TitoError::MissingToken);
        }

        self.execute(spec).await.inspect_err(|err| {
            self.logger.error(LOG_CHANNEL, &error_chain(err));
        })
    }

    async fn execute(&self, spec: &RequestSpec) -> Result<Value, TitoError> {
        let url = spec.url(&self.config.base_url);
        debug!("Sending {:?} request to Tito API: {}", spec.method, url);

        let response = self
            .http
            .request(spec.method.into(), url.as_str())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.authorization_header())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TitoError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn authorization_header(&self) -> String {
        format!("Token token={}", self.config.api_token)
    }

    fn missing_token_message(&self) -> String {
        format!(
            "Tito API access token is not set. It can be set on the configuration page: {}",
            self.settings_path
        )
    }
}

/// Rejects documents that carry no data: `null`, `false`, `0`, `""`, `"0"`,
/// `[]` and `{}`.
pub(crate) fn require_data(value: Value) -> Result<Value, TitoError> {
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    };

    if empty {
        Err(TitoError::EmptyResponse)
    } else {
        Ok(value)
    }
}
