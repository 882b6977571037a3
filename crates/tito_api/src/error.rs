// --- File: crates/tito_api/src/error.rs ---
use thiserror::Error;
use tito_common::{config_error, external_service_error, AppError, HttpStatusCode};

/// Tito-specific error types.
#[derive(Error, Debug)]
pub enum TitoError {
    /// No API token configured; no request was attempted
    #[error("Tito API access token is not set")]
    MissingToken,

    /// Error occurred while sending the request or reading the response
    #[error("Tito API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with anything other than 200 OK
    #[error("Tito API returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// Error parsing the response body as JSON
    #[error("Failed to parse Tito API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The API answered 200 OK with an empty document
    #[error("Tito API returned no data")]
    EmptyResponse,
}

/// Coarse classification of a [`TitoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local settings are incomplete. Reported to the user.
    Configuration,
    /// The remote call did not produce usable data. Reported to the log.
    Transport,
}

impl TitoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TitoError::MissingToken => ErrorKind::Configuration,
            TitoError::RequestError(_)
            | TitoError::UnexpectedStatus { .. }
            | TitoError::ParseError(_)
            | TitoError::EmptyResponse => ErrorKind::Transport,
        }
    }
}

/// Convert TitoError to AppError
impl From<TitoError> for AppError {
    fn from(err: TitoError) -> Self {
        match err {
            TitoError::MissingToken => config_error("Tito API access token is not set"),
            TitoError::RequestError(e) => AppError::HttpError(format!("Tito request error: {}", e)),
            TitoError::UnexpectedStatus { status } => {
                external_service_error("Tito API", format!("Status: {}", status))
            }
            TitoError::ParseError(e) => {
                AppError::ParseError(format!("Tito response parse error: {}", e))
            }
            TitoError::EmptyResponse => external_service_error("Tito API", "no data returned"),
        }
    }
}

impl HttpStatusCode for TitoError {
    fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Configuration => 500,
            ErrorKind::Transport => 502,
        }
    }
}
