//! CommitDraftGoalHandler - Command handler for the "Add Goal" action.

use tracing::{info, warn};

use super::snapshot::{IntakeSnapshot, OperationOutcome, GOAL_ADDED};
use crate::config::IntakeConfig;
use crate::domain::intake::{Advisory, IntakeError, IntakeSession};

/// Handler that moves the draft goal into the goal list.
pub struct CommitDraftGoalHandler {
    config: IntakeConfig,
}

impl CommitDraftGoalHandler {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, session: &mut IntakeSession) -> IntakeSnapshot {
        let goal_type = session.draft_goal().goal_type;
        let mut raised = Vec::new();

        let outcome = match session.commit_draft_goal() {
            Ok(position) => {
                info!(intake_id = %session.id(), %goal_type, position, "Goal added");
                OperationOutcome::GoalAdded {
                    position,
                    message: GOAL_ADDED.to_string(),
                }
            }
            Err(IntakeError::GoalValueTooLow(low)) => {
                warn!(intake_id = %session.id(), value = low.value, "Goal value below floor");
                raised.push(Advisory::GoalValueTooLow { value: low.value });
                OperationOutcome::from(IntakeError::GoalValueTooLow(low))
            }
            Err(err) => {
                warn!(intake_id = %session.id(), %goal_type, code = %err.code(), "Goal rejected");
                OperationOutcome::from(err)
            }
        };

        IntakeSnapshot::capture(session, outcome, raised, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goals::{reset_draft, GoalError, GoalType, MAX_GOALS};
    use crate::domain::intake::FieldEdit;

    fn handler() -> CommitDraftGoalHandler {
        CommitDraftGoalHandler::new(IntakeConfig::default())
    }

    #[test]
    fn commit_reports_one_based_position() {
        let mut session = IntakeSession::new();

        let first = handler().handle(&mut session);
        session
            .apply_edit(FieldEdit::GoalType(GoalType::EmergencyFund))
            .unwrap();
        let second = handler().handle(&mut session);

        assert!(matches!(first.outcome, OperationOutcome::GoalAdded { position: 1, .. }));
        assert_eq!(
            second.outcome,
            OperationOutcome::GoalAdded {
                position: 2,
                message: "Goal added successfully!".to_string(),
            }
        );
        assert_eq!(second.goals[1].position, 2);
        assert_eq!(second.goals[1].goal.goal_type, GoalType::EmergencyFund);
        assert_eq!(second.session.draft_goal(), &reset_draft());
    }

    #[test]
    fn low_value_raises_advisory_without_touching_registry() {
        let mut session = IntakeSession::new();
        session.apply_edit(FieldEdit::GoalValue(950)).unwrap();

        let snapshot = handler().handle(&mut session);

        assert!(matches!(
            snapshot.outcome,
            OperationOutcome::GoalValueTooLow { value: 950, .. }
        ));
        assert!(snapshot.has_advisory(|a| matches!(a, Advisory::GoalValueTooLow { value: 950 })));
        assert!(session.goals().is_empty());
        assert_eq!(session.draft_goal().goal_value, 950);
    }

    #[test]
    fn duplicate_type_is_rejected() {
        let mut session = IntakeSession::new();
        handler().handle(&mut session);

        let snapshot = handler().handle(&mut session);

        assert_eq!(
            snapshot.outcome,
            OperationOutcome::GoalRejected {
                error: GoalError::DuplicateGoalType {
                    goal_type: GoalType::RetirementPlanning
                },
                message: "This goal type already exists. Please choose a new goal type."
                    .to_string(),
            }
        );
        assert_eq!(session.goals().len(), 1);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut session = IntakeSession::new();
        for goal_type in &GoalType::all()[..MAX_GOALS] {
            session.apply_edit(FieldEdit::GoalType(*goal_type)).unwrap();
            handler().handle(&mut session);
        }
        session
            .apply_edit(FieldEdit::GoalType(GoalType::BusinessOwnership))
            .unwrap();

        let snapshot = handler().handle(&mut session);

        assert!(matches!(
            snapshot.outcome,
            OperationOutcome::GoalRejected {
                error: GoalError::CapacityExceeded,
                ..
            }
        ));
        assert_eq!(snapshot.goals.len(), MAX_GOALS);
    }
}
