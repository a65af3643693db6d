//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, lifecycle status and error types
//! that form the vocabulary of the intake form domain.

mod errors;
mod ids;
mod intake_status;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::IntakeId;
pub use intake_status::IntakeStatus;
pub use timestamp::{today, Timestamp};
