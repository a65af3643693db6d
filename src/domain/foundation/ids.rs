//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one intake form session.
///
/// Sessions are independent of each other; the id only exists so a
/// presentation layer and the logs can tell two sessions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeId(Uuid);

impl IntakeId {
    /// Creates a new random IntakeId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IntakeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IntakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IntakeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
