// --- File: crates/tito_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How prominently the host should display a [`UserMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Status,
    Warning,
    Error,
}

/// A message meant for the person using the host application, as opposed to
/// diagnostics meant for operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMessage {
    pub severity: Severity,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl UserMessage {
    /// Create a message stamped with the current time.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }
}
