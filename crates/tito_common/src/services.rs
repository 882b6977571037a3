// --- File: crates/tito_common/src/services.rs ---
//! Host collaborator abstractions.
//!
//! Integration crates report problems through these traits instead of talking
//! to a concrete logger or UI. The host application decides where diagnostics
//! and user messages end up.

use std::sync::{Mutex, PoisonError};
use tracing::error;

use crate::models::UserMessage;

/// Operator-facing diagnostics, grouped by channel.
pub trait DiagnosticLogger: Send + Sync {
    /// Record an error on `channel`.
    fn error(&self, channel: &str, message: &str);
}

/// User-facing messages.
pub trait Notifier: Send + Sync {
    /// Queue `message` for display to the current user.
    fn notify(&self, message: UserMessage);
}

/// [`DiagnosticLogger`] backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DiagnosticLogger for TracingLogger {
    fn error(&self, channel: &str, message: &str) {
        error!(channel = channel, "{}", message);
    }
}

/// In-memory [`Notifier`]; the host drains it when rendering a response.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<Vec<UserMessage>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every queued message, oldest first.
    pub fn drain(&self) -> Vec<UserMessage> {
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *messages)
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MessageQueue {
    fn notify(&self, message: UserMessage) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}
