//! Goal value object and the draft goal staged before it is committed.

use serde::{Deserialize, Serialize};

use super::{GoalType, Timescale, ValueTooLow};
use crate::domain::foundation::ValidationError;

/// Lowest goal value, in whole pounds, that may be added.
pub const MIN_GOAL_VALUE: i64 = 1000;

/// Maximum length of goal notes.
pub const MAX_NOTES_LENGTH: usize = 500;

/// A committed financial goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub goal_type: GoalType,
    /// Target value in whole pounds.
    pub goal_value: i64,
    pub timescale: Timescale,
    pub notes: String,
}

/// Builds a goal from its parts. Performs no validation.
pub fn create_goal(
    goal_type: GoalType,
    goal_value: i64,
    timescale: Timescale,
    notes: impl Into<String>,
) -> Goal {
    Goal {
        goal_type,
        goal_value,
        timescale,
        notes: notes.into(),
    }
}

/// Checks goal notes against the length limit.
pub fn validate_notes(notes: &str) -> Result<(), ValidationError> {
    let len = notes.chars().count();
    if len > MAX_NOTES_LENGTH {
        return Err(ValidationError::too_long("notes", MAX_NOTES_LENGTH, len));
    }
    Ok(())
}

/// Goal fields being edited before "Add Goal" is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftGoal {
    pub goal_type: GoalType,
    pub goal_value: i64,
    pub timescale: Timescale,
    pub notes: String,
}

impl DraftGoal {
    /// Checks the draft against the value floor.
    pub fn check_value(&self) -> Result<(), ValueTooLow> {
        if self.goal_value < MIN_GOAL_VALUE {
            return Err(ValueTooLow {
                value: self.goal_value,
            });
        }
        Ok(())
    }

    /// Builds the goal this draft describes.
    pub fn to_goal(&self) -> Goal {
        create_goal(self.goal_type, self.goal_value, self.timescale, self.notes.clone())
    }
}

impl Default for DraftGoal {
    fn default() -> Self {
        reset_draft()
    }
}

/// The fixed starting draft: first goal type, £1,000, one year, no notes.
pub fn reset_draft() -> DraftGoal {
    DraftGoal {
        goal_type: GoalType::first(),
        goal_value: MIN_GOAL_VALUE,
        timescale: Timescale::OneYear,
        notes: String::new(),
    }
}
