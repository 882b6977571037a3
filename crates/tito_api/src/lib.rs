// --- File: crates/tito_api/src/lib.rs ---
//! Client and lookup services for the Tito ticketing API.

pub mod client;
pub mod error;
pub mod event_service;
pub mod handlers;
pub mod routes;
#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod services_test;
pub mod ticket_service;

// Re-export for main backend
pub use client::{RequestMethod, RequestSpec, TitoClient, TitoConfig, LOG_CHANNEL};
pub use error::{ErrorKind, TitoError};
pub use event_service::EventService;
pub use handlers::TitoState;
pub use routes::routes;
pub use ticket_service::TicketService;
