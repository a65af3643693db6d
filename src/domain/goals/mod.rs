//! Goals domain module.
//!
//! Goal categories, timescales, the draft goal and the bounded registry
//! that enforces capacity and goal type uniqueness.

mod errors;
mod goal;
mod goal_type;
mod registry;
mod timescale;

pub use errors::{GoalError, ValueTooLow};
pub use goal::{
    create_goal, reset_draft, validate_notes, DraftGoal, Goal, MAX_NOTES_LENGTH,
    MIN_GOAL_VALUE,
};
pub use goal_type::GoalType;
pub use registry::{add_goal, can_add_goal, GoalRegistry, MAX_GOALS};
pub use timescale::Timescale;
