//! StartIntakeHandler - Command handler for opening a fresh session.

use tracing::info;

use super::snapshot::{IntakeSnapshot, OperationOutcome};
use crate::config::IntakeConfig;
use crate::domain::intake::IntakeSession;

/// Handler that discards the current session and opens a new one.
pub struct StartIntakeHandler {
    config: IntakeConfig,
}

impl StartIntakeHandler {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// Returns the new session together with its initial snapshot.
    pub fn handle(&self) -> (IntakeSession, IntakeSnapshot) {
        let session = IntakeSession::new();
        info!(intake_id = %session.id(), "Intake session started");

        let snapshot = IntakeSnapshot::capture(
            &session,
            OperationOutcome::SessionStarted,
            Vec::new(),
            &self.config,
        );
        (session, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Title;
    use crate::domain::foundation::IntakeStatus;
    use crate::domain::goals::reset_draft;

    #[test]
    fn new_session_starts_open_with_defaults() {
        let (session, snapshot) = StartIntakeHandler::new(IntakeConfig::default()).handle();

        assert_eq!(snapshot.outcome, OperationOutcome::SessionStarted);
        assert_eq!(session.status(), IntakeStatus::Open);
        assert_eq!(session.details().title, Some(Title::Mr));
        assert_eq!(session.draft_goal(), &reset_draft());
        assert!(snapshot.goals.is_empty());
        assert!(snapshot.advisories.is_empty());
    }

    #[test]
    fn each_session_gets_a_fresh_id() {
        let handler = StartIntakeHandler::new(IntakeConfig::default());
        let (first, _) = handler.handle();
        let (second, _) = handler.handle();

        assert_ne!(first.id(), second.id());
    }
}
