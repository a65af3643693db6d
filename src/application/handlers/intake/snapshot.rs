//! Read-only view of a session handed back after every event.

use serde::Serialize;

use crate::config::IntakeConfig;
use crate::domain::contact::{format_uk_phone, Answer};
use crate::domain::foundation::{ErrorCode, Timestamp};
use crate::domain::goals::{Goal, GoalError};
use crate::domain::intake::{Advisory, FieldError, FieldName, IntakeError, IntakeSession};

/// Message shown once a goal is committed.
pub const GOAL_ADDED: &str = "Goal added successfully!";

/// Result of the most recent event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OperationOutcome {
    SessionStarted,
    FieldUpdated {
        field: FieldName,
    },
    FieldRejected {
        code: ErrorCode,
        message: String,
    },
    GoalAdded {
        position: usize,
        message: String,
    },
    GoalRejected {
        error: GoalError,
        message: String,
    },
    GoalValueTooLow {
        value: i64,
        floor: i64,
        message: String,
    },
    ValidationFailed {
        fields: Vec<FieldError>,
        message: String,
    },
    SubmissionAccepted {
        submitted_at: Timestamp,
        message: String,
    },
    SessionClosed {
        message: String,
    },
}

impl OperationOutcome {
    /// True if the event changed the session.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            OperationOutcome::SessionStarted
                | OperationOutcome::FieldUpdated { .. }
                | OperationOutcome::GoalAdded { .. }
                | OperationOutcome::SubmissionAccepted { .. }
        )
    }
}

impl From<IntakeError> for OperationOutcome {
    fn from(err: IntakeError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            IntakeError::UnknownField(_) | IntakeError::InvalidValue(_) => {
                OperationOutcome::FieldRejected { code, message }
            }
            IntakeError::GoalRejected(error) => OperationOutcome::GoalRejected { error, message },
            IntakeError::GoalValueTooLow(low) => OperationOutcome::GoalValueTooLow {
                value: low.value,
                floor: low.floor(),
                message,
            },
            IntakeError::ValidationFailed(fields) => {
                OperationOutcome::ValidationFailed { fields, message }
            }
            IntakeError::AlreadySubmitted => OperationOutcome::SessionClosed { message },
        }
    }
}

/// A goal with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedGoal {
    pub position: usize,
    #[serde(flatten)]
    pub goal: Goal,
}

/// An advisory with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryNotice {
    #[serde(flatten)]
    pub advisory: Advisory,
    pub message: String,
}

impl From<Advisory> for AdvisoryNotice {
    fn from(advisory: Advisory) -> Self {
        let message = advisory.message();
        Self { advisory, message }
    }
}

/// Everything the presentation layer needs to render the form.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSnapshot {
    pub session: IntakeSession,
    pub goals: Vec<NumberedGoal>,
    pub formatted_phone: String,
    pub advisories: Vec<AdvisoryNotice>,
    pub outcome: OperationOutcome,
}

impl IntakeSnapshot {
    /// Captures the session after an event.
    ///
    /// `raised` holds advisories produced by the event itself; advisories
    /// that follow from the session state are added here.
    pub fn capture(
        session: &IntakeSession,
        outcome: OperationOutcome,
        raised: Vec<Advisory>,
        config: &IntakeConfig,
    ) -> Self {
        let mut advisories = raised;
        let preferences = session.preferences();
        if preferences.existing_client == Answer::Yes {
            advisories.push(Advisory::ExistingClient {
                portal_url: config.portal_url.clone(),
            });
        }
        if let Some(schedule) = preferences.scheduled_contact() {
            advisories.push(Advisory::ScheduledContact {
                schedule: *schedule,
            });
        }

        Self {
            session: session.clone(),
            goals: session
                .goals()
                .numbered()
                .map(|(position, goal)| NumberedGoal {
                    position,
                    goal: goal.clone(),
                })
                .collect(),
            formatted_phone: format_uk_phone(&session.details().phone_number),
            advisories: advisories.into_iter().map(AdvisoryNotice::from).collect(),
            outcome,
        }
    }

    /// True if any advisory of the given shape is present.
    pub fn has_advisory(&self, predicate: impl Fn(&Advisory) -> bool) -> bool {
        self.advisories.iter().any(|notice| predicate(&notice.advisory))
    }
}
