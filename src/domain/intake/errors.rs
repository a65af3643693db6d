//! Intake-specific error types.

use thiserror::Error;

use super::submission::{correction_message, FieldError};
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::goals::{GoalError, ValueTooLow};

/// Reasons an operation on an intake session was refused.
///
/// Every variant leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    #[error(transparent)]
    GoalRejected(#[from] GoalError),

    #[error(transparent)]
    GoalValueTooLow(#[from] ValueTooLow),

    #[error("{}", correction_message(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("This form has already been submitted")]
    AlreadySubmitted,
}

impl IntakeError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        IntakeError::UnknownField(name.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IntakeError::UnknownField(_) => ErrorCode::UnknownField,
            IntakeError::InvalidValue(err) => err.code(),
            IntakeError::GoalRejected(err) => err.code(),
            IntakeError::GoalValueTooLow(err) => err.code(),
            IntakeError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            IntakeError::AlreadySubmitted => ErrorCode::SessionSubmitted,
        }
    }
}
