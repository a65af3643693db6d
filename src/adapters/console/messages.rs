//! Line protocol for the console adapter.
//!
//! - Client → Form: one [`InboundEvent`] JSON object per line
//! - Form → Client: one [`OutboundMessage`] JSON object per line

use serde::{Deserialize, Serialize};

use crate::application::IntakeSnapshot;

// ============================================
// Client → Form Messages
// ============================================

/// All events the form accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Overwrite one field with the raw text the user entered.
    EditField { field: String, value: String },

    /// The "Add Goal" button.
    CommitDraftGoal,

    /// The "Submit" button.
    Submit,

    /// Discard the current session and start again.
    NewSession,
}

// ============================================
// Form → Client Messages
// ============================================

/// Everything written back to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Full form state after an event.
    Snapshot(Box<IntakeSnapshot>),

    /// The line could not be understood; the session is untouched.
    Error(ErrorMessage),
}

/// Protocol-level error sent to client.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
}

impl OutboundMessage {
    pub fn malformed(message: impl Into<String>) -> Self {
        OutboundMessage::Error(ErrorMessage {
            code: "MALFORMED_EVENT".to_string(),
            message: message.into(),
        })
    }
}

impl From<IntakeSnapshot> for OutboundMessage {
    fn from(snapshot: IntakeSnapshot) -> Self {
        OutboundMessage::Snapshot(Box::new(snapshot))
    }
}
