//! SubmitIntakeHandler - Command handler for form submission.

use tracing::{info, warn};

use super::snapshot::{IntakeSnapshot, OperationOutcome};
use crate::config::IntakeConfig;
use crate::domain::intake::{weekend_advisory, IntakeSession, SUBMISSION_THANKS};

/// Handler that runs the submission pipeline.
pub struct SubmitIntakeHandler {
    config: IntakeConfig,
}

impl SubmitIntakeHandler {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, session: &mut IntakeSession) -> IntakeSnapshot {
        // Independent of the blocking checks, but only while the form is open.
        let raised: Vec<_> = if session.is_submitted() {
            Vec::new()
        } else {
            weekend_advisory(session.preferences()).into_iter().collect()
        };

        let outcome = match session.submit() {
            Ok(submitted_at) => {
                info!(
                    intake_id = %session.id(),
                    goals = session.goals().len(),
                    "Intake submitted"
                );
                OperationOutcome::SubmissionAccepted {
                    submitted_at,
                    message: SUBMISSION_THANKS.to_string(),
                }
            }
            Err(err) => {
                warn!(intake_id = %session.id(), "Submission rejected: {}", err);
                OperationOutcome::from(err)
            }
        };

        IntakeSnapshot::capture(session, outcome, raised, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{ContactDay, ContactTiming, Title};
    use crate::domain::foundation::IntakeStatus;
    use crate::domain::intake::{Advisory, FieldEdit, SubmissionField};

    fn handler() -> SubmitIntakeHandler {
        SubmitIntakeHandler::new(IntakeConfig::default())
    }

    fn filled_session() -> IntakeSession {
        let mut session = IntakeSession::new();
        for edit in [
            FieldEdit::FirstName("Jane".to_string()),
            FieldEdit::Surname("Doe".to_string()),
            FieldEdit::PhoneNumber("07123 456 789".to_string()),
            FieldEdit::Email("a@b.co.uk.".to_string()),
            FieldEdit::PostCode("AB1 2CD".to_string()),
        ] {
            session.apply_edit(edit).unwrap();
        }
        session
    }

    #[test]
    fn complete_form_is_accepted() {
        let mut session = filled_session();

        let snapshot = handler().handle(&mut session);

        assert!(matches!(
            snapshot.outcome,
            OperationOutcome::SubmissionAccepted { .. }
        ));
        assert_eq!(snapshot.session.status(), IntakeStatus::Submitted);
    }

    #[test]
    fn empty_form_lists_six_fields_in_order() {
        let mut session = IntakeSession::new();
        session.apply_edit(FieldEdit::Title(None)).unwrap();

        let snapshot = handler().handle(&mut session);

        match snapshot.outcome {
            OperationOutcome::ValidationFailed { fields, message } => {
                let order: Vec<SubmissionField> = fields.iter().map(|f| f.field).collect();
                assert_eq!(order, SubmissionField::all());
                assert_eq!(
                    message,
                    "Please correct the following fields: Title, First Name, Surname, \
                     Phone Number (valid UK number required), \
                     E-mail (valid email address required), Post Code"
                );
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
        assert_eq!(session.status(), IntakeStatus::Open);
    }

    #[test]
    fn title_default_satisfies_title_check() {
        let mut session = IntakeSession::new();
        assert_eq!(session.details().title, Some(Title::Mr));

        let snapshot = handler().handle(&mut session);

        match snapshot.outcome {
            OperationOutcome::ValidationFailed { fields, .. } => {
                assert_eq!(fields.len(), 5);
                assert!(fields.iter().all(|f| f.field != SubmissionField::Title));
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn weekend_schedule_is_advised_but_not_blocking() {
        let mut session = filled_session();
        session
            .apply_edit(FieldEdit::ContactTiming(ContactTiming::SpecificDayTime))
            .unwrap();
        session
            .apply_edit(FieldEdit::ContactDay(ContactDay::Sunday))
            .unwrap();

        let snapshot = handler().handle(&mut session);

        assert!(snapshot.has_advisory(|a| *a == Advisory::WeekendContact));
        assert!(snapshot.outcome.is_success());
    }

    #[test]
    fn closed_session_does_not_repeat_weekend_advisory() {
        let mut session = filled_session();
        session
            .apply_edit(FieldEdit::ContactTiming(ContactTiming::SpecificDayTime))
            .unwrap();
        session
            .apply_edit(FieldEdit::ContactDay(ContactDay::Sunday))
            .unwrap();
        handler().handle(&mut session);

        let snapshot = handler().handle(&mut session);

        assert!(matches!(snapshot.outcome, OperationOutcome::SessionClosed { .. }));
        assert!(!snapshot.has_advisory(|a| *a == Advisory::WeekendContact));
    }

    #[test]
    fn second_submission_reports_closed_session() {
        let mut session = filled_session();
        handler().handle(&mut session);

        let snapshot = handler().handle(&mut session);

        assert!(matches!(snapshot.outcome, OperationOutcome::SessionClosed { .. }));
    }
}
