//! Error types for the domain layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' does not accept '{value}'")]
    UnknownOption { field: String, value: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a value outside a closed set of options.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a text length validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::UnknownOption { .. } => ErrorCode::UnknownOption,
            ValidationError::TooLong { .. } => ErrorCode::TooLong,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Field edit errors
    UnknownField,
    UnknownOption,
    OutOfRange,
    InvalidFormat,
    TooLong,

    // Goal errors
    GoalCapacityExceeded,
    DuplicateGoalType,
    GoalValueTooLow,

    // Submission errors
    ValidationFailed,

    // State errors
    SessionSubmitted,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnknownField => "UNKNOWN_FIELD",
            ErrorCode::UnknownOption => "UNKNOWN_OPTION",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::TooLong => "TOO_LONG",
            ErrorCode::GoalCapacityExceeded => "GOAL_CAPACITY_EXCEEDED",
            ErrorCode::DuplicateGoalType => "DUPLICATE_GOAL_TYPE",
            ErrorCode::GoalValueTooLow => "GOAL_VALUE_TOO_LOW",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SessionSubmitted => "SESSION_SUBMITTED",
        };
        write!(f, "{}", s)
    }
}
