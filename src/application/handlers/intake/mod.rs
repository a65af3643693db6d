//! Intake handlers.
//!
//! One handler per inbound event. Each returns an [`IntakeSnapshot`] so the
//! caller can re-render the whole form after every event.

mod commit_draft_goal;
mod edit_field;
mod snapshot;
mod start_intake;
mod submit_intake;

pub use commit_draft_goal::CommitDraftGoalHandler;
pub use edit_field::{EditFieldCommand, EditFieldHandler};
pub use snapshot::{AdvisoryNotice, IntakeSnapshot, NumberedGoal, OperationOutcome, GOAL_ADDED};
pub use start_intake::StartIntakeHandler;
pub use submit_intake::SubmitIntakeHandler;
