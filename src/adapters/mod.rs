//! Adapters - Connect the application layer to the outside world.
//!
//! - `console` - JSON lines over any reader and writer (stdin/stdout in the binary)

pub mod console;

pub use console::{ConsoleRunner, InboundEvent, OutboundMessage};
