//! Goal-specific error types.

use serde::Serialize;
use thiserror::Error;

use super::{GoalType, MAX_GOALS, MIN_GOAL_VALUE};
use crate::domain::foundation::ErrorCode;

/// Reasons the goal registry refuses a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GoalError {
    #[error("Maximum of {max} goals reached.", max = MAX_GOALS)]
    CapacityExceeded,

    #[error("This goal type already exists. Please choose a new goal type.")]
    DuplicateGoalType { goal_type: GoalType },
}

impl GoalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GoalError::CapacityExceeded => ErrorCode::GoalCapacityExceeded,
            GoalError::DuplicateGoalType { .. } => ErrorCode::DuplicateGoalType,
        }
    }
}

/// Advisory raised when a draft goal is below the value floor.
///
/// Not a [`GoalError`]: the draft is never offered to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("Goal Value must be at least £1,000.")]
pub struct ValueTooLow {
    pub value: i64,
}

impl ValueTooLow {
    pub fn floor(&self) -> i64 {
        MIN_GOAL_VALUE
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::GoalValueTooLow
    }
}
