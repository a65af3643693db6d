//! EditFieldHandler - Command handler for single field edits.

use tracing::{debug, warn};

use super::snapshot::{IntakeSnapshot, OperationOutcome};
use crate::config::IntakeConfig;
use crate::domain::foundation::today;
use crate::domain::intake::{FieldEdit, FieldName, IntakeError, IntakeSession};

/// Command to overwrite one form field.
#[derive(Debug, Clone)]
pub struct EditFieldCommand {
    pub field: String,
    pub value: String,
}

impl EditFieldCommand {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Handler for field edits.
pub struct EditFieldHandler {
    config: IntakeConfig,
}

impl EditFieldHandler {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, session: &mut IntakeSession, cmd: EditFieldCommand) -> IntakeSnapshot {
        let outcome = match Self::apply(session, &cmd) {
            Ok(field) => {
                // Values are personal data; only the field name is logged.
                debug!(intake_id = %session.id(), %field, "Field updated");
                OperationOutcome::FieldUpdated { field }
            }
            Err(err) => {
                warn!(intake_id = %session.id(), field = %cmd.field, code = %err.code(), "Field edit rejected");
                OperationOutcome::from(err)
            }
        };

        IntakeSnapshot::capture(session, outcome, Vec::new(), &self.config)
    }

    fn apply(session: &mut IntakeSession, cmd: &EditFieldCommand) -> Result<FieldName, IntakeError> {
        if session.is_submitted() {
            return Err(IntakeError::AlreadySubmitted);
        }

        // 1. Parse and bounds-check
        let edit = FieldEdit::parse(&cmd.field, &cmd.value, today())?;
        let field = edit.field();

        // 2. Apply
        session.apply_edit(edit)?;
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Answer;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::intake::Advisory;

    fn handler() -> EditFieldHandler {
        EditFieldHandler::new(IntakeConfig::default())
    }

    #[test]
    fn accepted_edit_reports_field() {
        let mut session = IntakeSession::new();

        let snapshot = handler().handle(&mut session, EditFieldCommand::new("surname", "Doe"));

        assert_eq!(
            snapshot.outcome,
            OperationOutcome::FieldUpdated {
                field: FieldName::Surname
            }
        );
        assert_eq!(session.details().surname, "Doe");
        assert_eq!(snapshot.session.details().surname, "Doe");
    }

    #[test]
    fn rejected_edit_leaves_session_unchanged() {
        let mut session = IntakeSession::new();
        let before = session.clone();

        let snapshot = handler().handle(&mut session, EditFieldCommand::new("contact_hour", "20"));

        assert!(matches!(
            snapshot.outcome,
            OperationOutcome::FieldRejected {
                code: ErrorCode::OutOfRange,
                ..
            }
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn existing_client_answer_raises_portal_advisory() {
        let mut session = IntakeSession::new();

        let snapshot =
            handler().handle(&mut session, EditFieldCommand::new("existing_client", "Yes"));

        assert_eq!(session.preferences().existing_client, Answer::Yes);
        assert!(snapshot.has_advisory(|a| matches!(a, Advisory::ExistingClient { .. })));
    }

    #[test]
    fn submitted_session_reports_closed_even_for_bad_values() {
        let mut session = IntakeSession::new();
        for (field, value) in [
            ("first_name", "Jane"),
            ("surname", "Doe"),
            ("phone_number", "07123456789"),
            ("email", "jane@example.co.uk"),
            ("post_code", "AB1 2CD"),
        ] {
            handler().handle(&mut session, EditFieldCommand::new(field, value));
        }
        session.submit().unwrap();

        let snapshot = handler().handle(&mut session, EditFieldCommand::new("no_such_field", "x"));

        assert!(matches!(snapshot.outcome, OperationOutcome::SessionClosed { .. }));
    }
}
