//! Timescale over which a goal should be reached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Timescale {
    #[default]
    #[serde(rename = "1 year")]
    OneYear,
    #[serde(rename = "2 years")]
    TwoYears,
    #[serde(rename = "3 years")]
    ThreeYears,
    #[serde(rename = "4 years")]
    FourYears,
    #[serde(rename = "5 years")]
    FiveYears,
    #[serde(rename = "7 years")]
    SevenYears,
}

impl Timescale {
    /// Returns all timescales in selector order.
    pub fn all() -> &'static [Timescale] {
        &[
            Timescale::OneYear,
            Timescale::TwoYears,
            Timescale::ThreeYears,
            Timescale::FourYears,
            Timescale::FiveYears,
            Timescale::SevenYears,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timescale::OneYear => "1 year",
            Timescale::TwoYears => "2 years",
            Timescale::ThreeYears => "3 years",
            Timescale::FourYears => "4 years",
            Timescale::FiveYears => "5 years",
            Timescale::SevenYears => "7 years",
        }
    }
}

impl fmt::Display for Timescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timescale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timescale::all()
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::unknown_option("timescale", s))
    }
}
