//! Console adapter.
//!
//! Drives an intake session from JSON lines on a reader and writes a JSON
//! snapshot line per event to a writer.

mod messages;
mod runner;

pub use messages::{ErrorMessage, InboundEvent, OutboundMessage};
pub use runner::ConsoleRunner;
