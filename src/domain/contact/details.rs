//! Personal contact details captured by the intake form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Maximum length of the free-text "further information" field.
pub const MAX_FURTHER_INFORMATION_LENGTH: usize = 2000;

/// Honorific offered by the title selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Title {
    #[default]
    Mr,
    Mrs,
    Ms,
    Dr,
}

impl Title {
    /// Returns all titles in selector order.
    pub fn all() -> &'static [Title] {
        &[Title::Mr, Title::Mrs, Title::Ms, Title::Dr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Ms => "Ms",
            Title::Dr => "Dr",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Title {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Title::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_option("title", s))
    }
}

/// Earliest accepted date of birth.
pub fn earliest_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Validates a date of birth against the range [1900-01-01, today].
pub fn validate_date_of_birth(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    let earliest = earliest_date_of_birth();
    if date < earliest || date > today {
        return Err(ValidationError::invalid_format(
            "date_of_birth",
            format!("must be between {} and {}", earliest, today),
        ));
    }
    Ok(())
}

/// Who the person is and how to reach them.
///
/// Fields are plain strings; emptiness and shape are only judged at
/// submission time so the person can fill the form in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// `None` when the selector has been cleared.
    pub title: Option<Title>,
    pub first_name: String,
    pub surname: String,
    pub phone_number: String,
    pub email: String,
    pub company: Option<String>,
    pub nationality: String,
    pub date_of_birth: Option<NaiveDate>,
    pub post_code: String,
    pub further_information: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            title: Some(Title::Mr),
            first_name: String::new(),
            surname: String::new(),
            phone_number: String::new(),
            email: String::new(),
            company: None,
            nationality: String::new(),
            date_of_birth: None,
            post_code: String::new(),
            further_information: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_is_mr() {
        assert_eq!(ContactDetails::default().title, Some(Title::Mr));
    }

    #[test]
    fn title_parses_offered_options_only() {
        assert_eq!("Dr".parse::<Title>().unwrap(), Title::Dr);
        assert_eq!("Ms".parse::<Title>().unwrap(), Title::Ms);
        assert!("Sir".parse::<Title>().is_err());
        assert!("mr".parse::<Title>().is_err());
    }

    #[test]
    fn date_of_birth_bounds_are_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(validate_date_of_birth(earliest_date_of_birth(), today).is_ok());
        assert!(validate_date_of_birth(today, today).is_ok());
    }

    #[test]
    fn date_of_birth_outside_range_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let too_early = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(validate_date_of_birth(too_early, today).is_err());
        assert!(validate_date_of_birth(tomorrow, today).is_err());
    }
}
