//! IntakeStatus enum for tracking the lifecycle of an intake form session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lifecycle status of an intake form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    #[default]
    Open,
    Submitted,
}

impl IntakeStatus {
    /// Returns true if the session still accepts edits.
    pub fn is_mutable(&self) -> bool {
        matches!(self, IntakeStatus::Open)
    }

    /// Returns true if transition from self to target is valid.
    ///
    /// The only transition is Open -> Submitted.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (IntakeStatus::Open, IntakeStatus::Submitted))
    }

    /// Performs transition with validation, returning error if invalid.
    pub fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("Cannot transition from {} to {}", self, target),
            ))
        }
    }
}

impl fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntakeStatus::Open => "Open",
            IntakeStatus::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}
