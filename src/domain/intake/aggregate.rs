//! Intake session aggregate.
//!
//! One session holds everything a single person has entered: contact
//! details, preferences, committed goals and the draft goal. It is an
//! owned value handed to each handler in turn; nothing about it is
//! global or shared.

use serde::Serialize;

use super::{validate_submission, FieldEdit, IntakeError};
use crate::domain::contact::{ContactDetails, ContactPreferences};
use crate::domain::foundation::{IntakeId, IntakeStatus, Timestamp};
use crate::domain::goals::{reset_draft, DraftGoal, GoalRegistry};

/// Intake session aggregate.
///
/// # Invariants
///
/// - the goal registry never holds more than 10 goals or two goals of one type
/// - a rejected operation leaves every field unchanged
/// - once `Submitted`, no further mutation is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeSession {
    id: IntakeId,
    status: IntakeStatus,
    details: ContactDetails,
    preferences: ContactPreferences,
    goals: GoalRegistry,
    draft_goal: DraftGoal,
    started_at: Timestamp,
    submitted_at: Option<Timestamp>,
}

impl IntakeSession {
    /// Starts a new open session with default field values.
    pub fn new() -> Self {
        Self {
            id: IntakeId::new(),
            status: IntakeStatus::Open,
            details: ContactDetails::default(),
            preferences: ContactPreferences::default(),
            goals: GoalRegistry::new(),
            draft_goal: reset_draft(),
            started_at: Timestamp::now(),
            submitted_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &IntakeId {
        &self.id
    }

    pub fn status(&self) -> IntakeStatus {
        self.status
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn preferences(&self) -> &ContactPreferences {
        &self.preferences
    }

    pub fn goals(&self) -> &GoalRegistry {
        &self.goals
    }

    pub fn draft_goal(&self) -> &DraftGoal {
        &self.draft_goal
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn submitted_at(&self) -> Option<&Timestamp> {
        self.submitted_at.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.status == IntakeStatus::Submitted
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrites one field with an already-parsed value.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the session is terminal
    pub fn apply_edit(&mut self, edit: FieldEdit) -> Result<(), IntakeError> {
        self.ensure_mutable()?;

        let details = &mut self.details;
        let prefs = &mut self.preferences;
        let draft = &mut self.draft_goal;
        match edit {
            FieldEdit::Title(v) => details.title = v,
            FieldEdit::FirstName(v) => details.first_name = v,
            FieldEdit::Surname(v) => details.surname = v,
            FieldEdit::PhoneNumber(v) => details.phone_number = v,
            FieldEdit::Email(v) => details.email = v,
            FieldEdit::Company(v) => details.company = v,
            FieldEdit::Nationality(v) => details.nationality = v,
            FieldEdit::DateOfBirth(v) => details.date_of_birth = Some(v),
            FieldEdit::PostCode(v) => details.post_code = v,
            FieldEdit::FurtherInformation(v) => details.further_information = v,
            FieldEdit::ExistingClient(v) => prefs.existing_client = v,
            FieldEdit::PreferredContactMethod(v) => prefs.preferred_contact_method = v,
            FieldEdit::ContactTiming(v) => prefs.contact_timing = v,
            FieldEdit::ContactDay(v) => prefs.schedule.day = v,
            FieldEdit::ContactHour(v) => prefs.schedule.hour = v,
            FieldEdit::ContactMinute(v) => prefs.schedule.minute = v,
            FieldEdit::Referred(v) => prefs.referred = v,
            FieldEdit::ReferralSource(v) => prefs.referral_source = v,
            FieldEdit::SpecificAdviser(v) => prefs.specific_adviser = v,
            FieldEdit::GoalType(v) => draft.goal_type = v,
            FieldEdit::GoalValue(v) => draft.goal_value = v,
            FieldEdit::Timescale(v) => draft.timescale = v,
            FieldEdit::Notes(v) => draft.notes = v,
        }
        Ok(())
    }

    /// Commits the draft goal to the registry and resets the draft.
    ///
    /// Returns the 1-based position of the new goal.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the session is terminal
    /// - `GoalValueTooLow` if the draft is below the value floor; the
    ///   registry is not consulted
    /// - `GoalRejected` if the registry is full or already has the type
    pub fn commit_draft_goal(&mut self) -> Result<usize, IntakeError> {
        self.ensure_mutable()?;
        self.draft_goal.check_value()?;

        self.goals.add(self.draft_goal.to_goal())?;
        self.draft_goal = reset_draft();
        Ok(self.goals.len())
    }

    /// Validates every required field and, if all pass, closes the session.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the session is terminal
    /// - `ValidationFailed` with every failing field, in check order
    pub fn submit(&mut self) -> Result<Timestamp, IntakeError> {
        self.ensure_mutable()?;
        validate_submission(&self.details, &self.preferences)
            .map_err(IntakeError::ValidationFailed)?;

        self.status = self.status.transition_to(IntakeStatus::Submitted)?;
        let now = Timestamp::now();
        self.submitted_at = Some(now);
        Ok(now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), IntakeError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(IntakeError::AlreadySubmitted)
        }
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
