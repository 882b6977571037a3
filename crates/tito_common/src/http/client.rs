// --- File: crates/tito_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{redirect::Policy, Client, Error as ReqwestError};
use std::time::Duration;
use tracing::warn;

/// Default timeout for outbound requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("tito-integration/", env!("CARGO_PKG_VERSION"));

/// Process-wide HTTP client. Integration clients clone it; clones share the
/// connection pool.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client(DEFAULT_TIMEOUT, true).unwrap_or_else(|err| {
        warn!("Falling back to an unconfigured HTTP client: {}", err);
        Client::new()
    })
});

/// Builds a client with the given timeout and redirect behaviour.
pub fn create_client(timeout: Duration, follow_redirects: bool) -> Result<Client, ReqwestError> {
    let redirects = if follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };

    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(redirects)
        .build()
}
