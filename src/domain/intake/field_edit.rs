//! Field edits arriving from the presentation layer.
//!
//! Raw `(field, value)` pairs are parsed into a typed [`FieldEdit`]
//! before anything touches the session, so a rejected edit never leaves
//! partial state behind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::IntakeError;
use crate::domain::contact::{
    validate_date_of_birth, Answer, ContactDay, ContactMethod, ContactSchedule, ContactTiming,
    Title, MAX_FURTHER_INFORMATION_LENGTH,
};
use crate::domain::foundation::ValidationError;
use crate::domain::goals::{validate_notes, GoalType, Timescale};

/// Every editable field on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Title,
    FirstName,
    Surname,
    PhoneNumber,
    Email,
    Company,
    Nationality,
    DateOfBirth,
    PostCode,
    FurtherInformation,
    ExistingClient,
    PreferredContactMethod,
    ContactTiming,
    ContactDay,
    ContactHour,
    ContactMinute,
    Referred,
    ReferralSource,
    SpecificAdviser,
    GoalType,
    GoalValue,
    Timescale,
    Notes,
}

impl FieldName {
    pub fn all() -> &'static [FieldName] {
        use FieldName::*;
        &[
            Title,
            FirstName,
            Surname,
            PhoneNumber,
            Email,
            Company,
            Nationality,
            DateOfBirth,
            PostCode,
            FurtherInformation,
            ExistingClient,
            PreferredContactMethod,
            ContactTiming,
            ContactDay,
            ContactHour,
            ContactMinute,
            Referred,
            ReferralSource,
            SpecificAdviser,
            GoalType,
            GoalValue,
            Timescale,
            Notes,
        ]
    }

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::FirstName => "first_name",
            FieldName::Surname => "surname",
            FieldName::PhoneNumber => "phone_number",
            FieldName::Email => "email",
            FieldName::Company => "company",
            FieldName::Nationality => "nationality",
            FieldName::DateOfBirth => "date_of_birth",
            FieldName::PostCode => "post_code",
            FieldName::FurtherInformation => "further_information",
            FieldName::ExistingClient => "existing_client",
            FieldName::PreferredContactMethod => "preferred_contact_method",
            FieldName::ContactTiming => "contact_timing",
            FieldName::ContactDay => "contact_day",
            FieldName::ContactHour => "contact_hour",
            FieldName::ContactMinute => "contact_minute",
            FieldName::Referred => "referred",
            FieldName::ReferralSource => "referral_source",
            FieldName::SpecificAdviser => "specific_adviser",
            FieldName::GoalType => "goal_type",
            FieldName::GoalValue => "goal_value",
            FieldName::Timescale => "timescale",
            FieldName::Notes => "notes",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| IntakeError::unknown_field(s))
    }
}

/// A parsed, bounds-checked edit of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Title(Option<Title>),
    FirstName(String),
    Surname(String),
    PhoneNumber(String),
    Email(String),
    Company(Option<String>),
    Nationality(String),
    DateOfBirth(NaiveDate),
    PostCode(String),
    FurtherInformation(String),
    ExistingClient(Answer),
    PreferredContactMethod(ContactMethod),
    ContactTiming(ContactTiming),
    ContactDay(ContactDay),
    ContactHour(u8),
    ContactMinute(u8),
    Referred(Answer),
    ReferralSource(String),
    SpecificAdviser(String),
    GoalType(GoalType),
    GoalValue(i64),
    Timescale(Timescale),
    Notes(String),
}

impl FieldEdit {
    /// Parses a raw `(field, value)` pair.
    ///
    /// `today` bounds the date of birth.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if `field` names no form field
    /// - `InvalidValue` if `value` is not an accepted value for the field
    pub fn parse(field: &str, value: &str, today: NaiveDate) -> Result<Self, IntakeError> {
        let name: FieldName = field.parse()?;
        Self::parse_value(name, value, today)
    }

    /// Parses `value` for an already-resolved field.
    pub fn parse_value(name: FieldName, value: &str, today: NaiveDate) -> Result<Self, IntakeError> {
        let text = || value.to_string();
        let edit = match name {
            FieldName::Title => FieldEdit::Title(match value {
                "" => None,
                other => Some(other.parse()?),
            }),
            FieldName::FirstName => FieldEdit::FirstName(text()),
            FieldName::Surname => FieldEdit::Surname(text()),
            FieldName::PhoneNumber => FieldEdit::PhoneNumber(text()),
            FieldName::Email => FieldEdit::Email(text()),
            FieldName::Company => FieldEdit::Company(Some(text()).filter(|c| !c.is_empty())),
            FieldName::Nationality => FieldEdit::Nationality(text()),
            FieldName::DateOfBirth => {
                let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    ValidationError::invalid_format(name.as_str(), "expected YYYY-MM-DD")
                })?;
                validate_date_of_birth(date, today)?;
                FieldEdit::DateOfBirth(date)
            }
            FieldName::PostCode => FieldEdit::PostCode(text()),
            FieldName::FurtherInformation => {
                let len = value.chars().count();
                if len > MAX_FURTHER_INFORMATION_LENGTH {
                    return Err(ValidationError::too_long(
                        name.as_str(),
                        MAX_FURTHER_INFORMATION_LENGTH,
                        len,
                    )
                    .into());
                }
                FieldEdit::FurtherInformation(text())
            }
            FieldName::ExistingClient => FieldEdit::ExistingClient(value.parse()?),
            FieldName::PreferredContactMethod => FieldEdit::PreferredContactMethod(value.parse()?),
            FieldName::ContactTiming => FieldEdit::ContactTiming(value.parse()?),
            FieldName::ContactDay => FieldEdit::ContactDay(value.parse()?),
            FieldName::ContactHour => {
                FieldEdit::ContactHour(ContactSchedule::validate_hour(parse_integer(name, value)?)?)
            }
            FieldName::ContactMinute => FieldEdit::ContactMinute(ContactSchedule::validate_minute(
                parse_integer(name, value)?,
            )?),
            FieldName::Referred => FieldEdit::Referred(value.parse()?),
            FieldName::ReferralSource => FieldEdit::ReferralSource(text()),
            FieldName::SpecificAdviser => FieldEdit::SpecificAdviser(text()),
            FieldName::GoalType => FieldEdit::GoalType(value.parse()?),
            FieldName::GoalValue => FieldEdit::GoalValue(parse_integer(name, value)?),
            FieldName::Timescale => FieldEdit::Timescale(value.parse()?),
            FieldName::Notes => {
                validate_notes(value)?;
                FieldEdit::Notes(text())
            }
        };
        Ok(edit)
    }

    /// The field this edit targets.
    pub fn field(&self) -> FieldName {
        match self {
            FieldEdit::Title(_) => FieldName::Title,
            FieldEdit::FirstName(_) => FieldName::FirstName,
            FieldEdit::Surname(_) => FieldName::Surname,
            FieldEdit::PhoneNumber(_) => FieldName::PhoneNumber,
            FieldEdit::Email(_) => FieldName::Email,
            FieldEdit::Company(_) => FieldName::Company,
            FieldEdit::Nationality(_) => FieldName::Nationality,
            FieldEdit::DateOfBirth(_) => FieldName::DateOfBirth,
            FieldEdit::PostCode(_) => FieldName::PostCode,
            FieldEdit::FurtherInformation(_) => FieldName::FurtherInformation,
            FieldEdit::ExistingClient(_) => FieldName::ExistingClient,
            FieldEdit::PreferredContactMethod(_) => FieldName::PreferredContactMethod,
            FieldEdit::ContactTiming(_) => FieldName::ContactTiming,
            FieldEdit::ContactDay(_) => FieldName::ContactDay,
            FieldEdit::ContactHour(_) => FieldName::ContactHour,
            FieldEdit::ContactMinute(_) => FieldName::ContactMinute,
            FieldEdit::Referred(_) => FieldName::Referred,
            FieldEdit::ReferralSource(_) => FieldName::ReferralSource,
            FieldEdit::SpecificAdviser(_) => FieldName::SpecificAdviser,
            FieldEdit::GoalType(_) => FieldName::GoalType,
            FieldEdit::GoalValue(_) => FieldName::GoalValue,
            FieldEdit::Timescale(_) => FieldName::Timescale,
            FieldEdit::Notes(_) => FieldName::Notes,
        }
    }
}

fn parse_integer(name: FieldName, value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(name.as_str(), "expected a whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn parse(field: &str, value: &str) -> Result<FieldEdit, IntakeError> {
        FieldEdit::parse(field, value, today())
    }

    #[test]
    fn every_field_name_round_trips() {
        for name in FieldName::all() {
            assert_eq!(name.as_str().parse::<FieldName>().unwrap(), *name);
        }
    }

    #[test]
    fn field_name_serde_matches_wire_name() {
        let json = serde_json::to_string(&FieldName::PreferredContactMethod).unwrap();
        assert_eq!(json, "\"preferred_contact_method\"");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse("middle_name", "Ann").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownField);
    }

    #[test]
    fn text_fields_are_taken_verbatim() {
        assert_eq!(
            parse("first_name", " Jane ").unwrap(),
            FieldEdit::FirstName(" Jane ".to_string())
        );
        assert_eq!(parse("surname", "").unwrap(), FieldEdit::Surname(String::new()));
    }

    #[test]
    fn empty_title_clears_selection() {
        assert_eq!(parse("title", "").unwrap(), FieldEdit::Title(None));
        assert_eq!(parse("title", "Mrs").unwrap(), FieldEdit::Title(Some(Title::Mrs)));
        assert!(parse("title", "Lord").is_err());
    }

    #[test]
    fn empty_company_is_none() {
        assert_eq!(parse("company", "").unwrap(), FieldEdit::Company(None));
        assert_eq!(
            parse("company", "Acme").unwrap(),
            FieldEdit::Company(Some("Acme".to_string()))
        );
    }

    #[test]
    fn date_of_birth_is_parsed_and_bounded() {
        assert_eq!(
            parse("date_of_birth", "1985-06-30").unwrap(),
            FieldEdit::DateOfBirth(NaiveDate::from_ymd_opt(1985, 6, 30).unwrap())
        );
        assert!(parse("date_of_birth", "30/06/1985").is_err());
        assert!(parse("date_of_birth", "1899-12-31").is_err());
        assert!(parse("date_of_birth", "2026-10-19").is_err());
    }

    #[test]
    fn contact_slot_fields_are_bounded() {
        assert_eq!(parse("contact_hour", "17").unwrap(), FieldEdit::ContactHour(17));
        assert!(parse("contact_hour", "18").is_err());
        assert!(parse("contact_hour", "nine").is_err());
        assert_eq!(parse("contact_minute", "30").unwrap(), FieldEdit::ContactMinute(30));
        assert!(parse("contact_minute", "20").is_err());
    }

    #[test]
    fn weekend_day_is_accepted_as_input() {
        assert_eq!(
            parse("contact_day", "Saturday").unwrap(),
            FieldEdit::ContactDay(ContactDay::Saturday)
        );
    }

    #[test]
    fn goal_value_below_floor_still_parses() {
        assert_eq!(parse("goal_value", "500").unwrap(), FieldEdit::GoalValue(500));
        assert!(parse("goal_value", "1,000").is_err());
    }

    #[test]
    fn long_text_is_rejected() {
        let err = parse("notes", &"n".repeat(501)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TooLong);
        assert!(parse("further_information", &"i".repeat(2000)).is_ok());
        assert!(parse("further_information", &"i".repeat(2001)).is_err());
    }

    #[test]
    fn edit_reports_its_field() {
        let edit = parse("timescale", "3 years").unwrap();
        assert_eq!(edit.field(), FieldName::Timescale);
    }
}
