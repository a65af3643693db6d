//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, timestamps, errors)
//! - `contact` - Contact details, preferences and their validators
//! - `goals` - Goal categories, the draft goal and the bounded goal registry
//! - `intake` - Intake session aggregate, field edits and submission pipeline

pub mod contact;
pub mod foundation;
pub mod goals;
pub mod intake;
