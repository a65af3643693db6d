//! How and when the person would like to be contacted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Earliest bookable contact hour.
pub const FIRST_CONTACT_HOUR: u8 = 9;

/// Latest bookable contact hour.
pub const LAST_CONTACT_HOUR: u8 = 17;

/// Minutes past the hour a contact slot may start at.
pub const CONTACT_MINUTES: [u8; 4] = [0, 15, 30, 45];

/// Yes/No radio answer that starts unanswered.
///
/// Serialized with the same labels the form accepts as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Answer {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Answer {
    pub fn all() -> &'static [Answer] {
        &[Answer::Yes, Answer::No, Answer::Unset]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::Unset => "",
        }
    }
}

/// Preferred channel for the first contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContactMethod {
    #[serde(rename = "E-mail")]
    Email,
    #[serde(rename = "Phone")]
    Phone,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl ContactMethod {
    pub fn all() -> &'static [ContactMethod] {
        &[ContactMethod::Email, ContactMethod::Phone, ContactMethod::Unset]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "E-mail",
            ContactMethod::Phone => "Phone",
            ContactMethod::Unset => "",
        }
    }
}

/// When the person is happy to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContactTiming {
    #[serde(rename = "Anytime")]
    Anytime,
    #[serde(rename = "Specific Day and Time")]
    SpecificDayTime,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl ContactTiming {
    pub fn all() -> &'static [ContactTiming] {
        &[
            ContactTiming::Anytime,
            ContactTiming::SpecificDayTime,
            ContactTiming::Unset,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactTiming::Anytime => "Anytime",
            ContactTiming::SpecificDayTime => "Specific Day and Time",
            ContactTiming::Unset => "",
        }
    }
}

// Radio answers parse from and display as their labels.
macro_rules! labelled_option {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::all()
                    .iter()
                    .copied()
                    .find(|option| option.label() == s)
                    .ok_or_else(|| ValidationError::unknown_option($field, s))
            }
        }
    };
}

labelled_option!(Answer, "answer");
labelled_option!(ContactMethod, "preferred_contact_method");
labelled_option!(ContactTiming, "contact_timing");

/// Day of the week for a scheduled contact.
///
/// The day selector only offers Monday to Friday; the weekend variants
/// exist so values arriving by other routes can be represented and flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContactDay {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ContactDay {
    /// Returns all seven days, Monday first.
    pub fn all() -> &'static [ContactDay] {
        &[
            ContactDay::Monday,
            ContactDay::Tuesday,
            ContactDay::Wednesday,
            ContactDay::Thursday,
            ContactDay::Friday,
            ContactDay::Saturday,
            ContactDay::Sunday,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactDay::Monday => "Monday",
            ContactDay::Tuesday => "Tuesday",
            ContactDay::Wednesday => "Wednesday",
            ContactDay::Thursday => "Thursday",
            ContactDay::Friday => "Friday",
            ContactDay::Saturday => "Saturday",
            ContactDay::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for ContactDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ContactDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactDay::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| ValidationError::unknown_option("contact_day", s))
    }
}

/// Day and time slot chosen for a specific-time contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSchedule {
    pub day: ContactDay,
    pub hour: u8,
    pub minute: u8,
}

impl ContactSchedule {
    /// Validates an hour against the bookable window.
    pub fn validate_hour(hour: i64) -> Result<u8, ValidationError> {
        let (min, max) = (i64::from(FIRST_CONTACT_HOUR), i64::from(LAST_CONTACT_HOUR));
        if !(min..=max).contains(&hour) {
            return Err(ValidationError::out_of_range("contact_hour", min, max, hour));
        }
        Ok(hour as u8)
    }

    /// Validates a minute against the quarter-hour slots.
    pub fn validate_minute(minute: i64) -> Result<u8, ValidationError> {
        CONTACT_MINUTES
            .iter()
            .copied()
            .find(|m| i64::from(*m) == minute)
            .ok_or_else(|| {
                ValidationError::invalid_format("contact_minute", "must be one of 0, 15, 30, 45")
            })
    }
}

impl Default for ContactSchedule {
    fn default() -> Self {
        Self {
            day: ContactDay::Monday,
            hour: FIRST_CONTACT_HOUR,
            minute: 0,
        }
    }
}

impl fmt::Display for ContactSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{:02}", self.day, self.hour, self.minute)
    }
}

/// Contact preferences section of the form.
///
/// The schedule and referral fields keep whatever was last entered even
/// when the controlling answer changes; they only count while the
/// controlling answer selects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactPreferences {
    pub existing_client: Answer,
    pub preferred_contact_method: ContactMethod,
    pub contact_timing: ContactTiming,
    pub schedule: ContactSchedule,
    pub referred: Answer,
    pub referral_source: String,
    pub specific_adviser: String,
}

impl ContactPreferences {
    /// The schedule, if a specific day and time was chosen.
    pub fn scheduled_contact(&self) -> Option<&ContactSchedule> {
        match self.contact_timing {
            ContactTiming::SpecificDayTime => Some(&self.schedule),
            _ => None,
        }
    }
}
