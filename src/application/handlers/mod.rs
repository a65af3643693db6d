//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod intake;

pub use intake::{
    AdvisoryNotice, CommitDraftGoalHandler, EditFieldCommand, EditFieldHandler, IntakeSnapshot,
    NumberedGoal, OperationOutcome, StartIntakeHandler, SubmitIntakeHandler,
};
