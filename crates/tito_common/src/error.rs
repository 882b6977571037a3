// --- File: crates/tito_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the Tito crates.
///
/// Integration crates keep their own error enums and implement
/// `From<SpecificError> for AppError` so handlers can render them uniformly.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AppError {
    fn status_code(&self) -> u16 {
        match self {
            AppError::HttpError(_) => 502,
            AppError::ParseError(_) => 502,
            AppError::ConfigError(_) => 500,
            AppError::ExternalServiceError { .. } => 502,
        }
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> AppError {
    AppError::ConfigError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AppError {
    AppError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
