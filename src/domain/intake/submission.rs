//! Submission validation pipeline.
//!
//! Every check runs; failures are collected in check order so the person
//! sees the complete list at once.

use serde::Serialize;
use std::fmt;

use super::Advisory;
use crate::domain::contact::{
    is_valid_email, is_valid_uk_phone, is_weekend, ContactDetails, ContactPreferences,
};

/// Prefix of the message shown when submission is blocked.
pub const CORRECTION_PROMPT: &str = "Please correct the following fields: ";

/// Message shown once a submission is accepted.
pub const SUBMISSION_THANKS: &str = "Thank you for contacting us! We will reach out to you soon.";

/// Required fields, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    Title,
    FirstName,
    Surname,
    PhoneNumber,
    Email,
    PostCode,
}

impl SubmissionField {
    pub fn all() -> &'static [SubmissionField] {
        &[
            SubmissionField::Title,
            SubmissionField::FirstName,
            SubmissionField::Surname,
            SubmissionField::PhoneNumber,
            SubmissionField::Email,
            SubmissionField::PostCode,
        ]
    }

    /// Label shown to the person when this field fails.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionField::Title => "Title",
            SubmissionField::FirstName => "First Name",
            SubmissionField::Surname => "Surname",
            SubmissionField::PhoneNumber => "Phone Number (valid UK number required)",
            SubmissionField::Email => "E-mail (valid email address required)",
            SubmissionField::PostCode => "Post Code",
        }
    }

    fn passes(&self, details: &ContactDetails) -> bool {
        match self {
            SubmissionField::Title => details.title.is_some(),
            SubmissionField::FirstName => !details.first_name.is_empty(),
            SubmissionField::Surname => !details.surname.is_empty(),
            SubmissionField::PhoneNumber => {
                !details.phone_number.is_empty() && is_valid_uk_phone(&details.phone_number)
            }
            SubmissionField::Email => !details.email.is_empty() && is_valid_email(&details.email),
            SubmissionField::PostCode => !details.post_code.is_empty(),
        }
    }
}

/// A required field that blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: SubmissionField,
    pub label: &'static str,
}

impl From<SubmissionField> for FieldError {
    fn from(field: SubmissionField) -> Self {
        Self {
            field,
            label: field.label(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Runs every required-field check and collects the failures.
///
/// No preference field blocks submission; the weekend rule is advisory
/// and lives in [`weekend_advisory`].
pub fn validate_submission(
    details: &ContactDetails,
    _preferences: &ContactPreferences,
) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = SubmissionField::all()
        .iter()
        .filter(|field| !field.passes(details))
        .map(|field| FieldError::from(*field))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Warns when a specific contact day falls on a weekend.
///
/// The day selector only offers Monday to Friday, so this can only fire
/// for days that arrived through another input path.
pub fn weekend_advisory(preferences: &ContactPreferences) -> Option<Advisory> {
    preferences
        .scheduled_contact()
        .filter(|schedule| is_weekend(schedule.day.name()))
        .map(|_| Advisory::WeekendContact)
}

/// Joins field errors into the message shown to the person.
pub fn correction_message(errors: &[FieldError]) -> String {
    let labels: Vec<&str> = errors.iter().map(|e| e.label).collect();
    format!("{}{}", CORRECTION_PROMPT, labels.join(", "))
}
