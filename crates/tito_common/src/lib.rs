// --- File: crates/tito_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Host collaborator abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, external_service_error, AppError, HttpStatusCode};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    map_json_error, IntoHttpResponse,
};

pub use models::{Severity, UserMessage};
pub use services::{DiagnosticLogger, MessageQueue, Notifier, TracingLogger};
