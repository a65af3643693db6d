//! Bounded, deduplicated list of committed goals.

use serde::{Deserialize, Serialize};

use super::{Goal, GoalError, GoalType};

/// Maximum number of goals a single intake may hold.
pub const MAX_GOALS: usize = 10;

/// Ordered collection of goals.
///
/// # Invariants
///
/// - at most [`MAX_GOALS`] entries
/// - goal types are pairwise distinct
/// - insertion order is preserved
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalRegistry {
    goals: Vec<Goal>,
}

impl GoalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.goals.len() >= MAX_GOALS
    }

    pub fn contains(&self, goal_type: GoalType) -> bool {
        self.goals.iter().any(|g| g.goal_type == goal_type)
    }

    /// Goals paired with their display position, starting at 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Goal)> {
        self.goals.iter().enumerate().map(|(i, g)| (i + 1, g))
    }

    /// Checks whether a goal of `goal_type` would be admitted.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the registry is full (checked first)
    /// - `DuplicateGoalType` if a goal of this type exists
    pub fn can_add(&self, goal_type: GoalType) -> Result<(), GoalError> {
        if self.is_full() {
            return Err(GoalError::CapacityExceeded);
        }
        if self.contains(goal_type) {
            return Err(GoalError::DuplicateGoalType { goal_type });
        }
        Ok(())
    }

    /// Appends `goal` if it is admitted. On error nothing changes.
    pub fn add(&mut self, goal: Goal) -> Result<(), GoalError> {
        self.can_add(goal.goal_type)?;
        self.goals.push(goal);
        Ok(())
    }
}

/// Free-function form of [`GoalRegistry::can_add`].
pub fn can_add_goal(registry: &GoalRegistry, goal_type: GoalType) -> Result<(), GoalError> {
    registry.can_add(goal_type)
}

/// Free-function form of [`GoalRegistry::add`].
pub fn add_goal(registry: &mut GoalRegistry, goal: Goal) -> Result<(), GoalError> {
    registry.add(goal)
}
