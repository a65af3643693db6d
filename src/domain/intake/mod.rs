//! Intake domain module.
//!
//! The intake session aggregate, the field edits that change it and the
//! submission pipeline that decides whether it may close.

mod advisory;
mod aggregate;
mod errors;
mod field_edit;
mod submission;

pub use advisory::Advisory;
pub use aggregate::IntakeSession;
pub use errors::IntakeError;
pub use field_edit::{FieldEdit, FieldName};
pub use submission::{
    correction_message, validate_submission, weekend_advisory, FieldError, SubmissionField,
    CORRECTION_PROMPT, SUBMISSION_THANKS,
};
