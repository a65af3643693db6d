//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and shapes the snapshot that
//! adapters render after every event.

pub mod handlers;

pub use handlers::{
    AdvisoryNotice, CommitDraftGoalHandler, EditFieldCommand, EditFieldHandler, IntakeSnapshot,
    NumberedGoal, OperationOutcome, StartIntakeHandler, SubmitIntakeHandler,
};
