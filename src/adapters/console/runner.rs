//! Event loop that drives one intake session from a line stream.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::messages::{InboundEvent, OutboundMessage};
use crate::application::{
    CommitDraftGoalHandler, EditFieldCommand, EditFieldHandler, IntakeSnapshot,
    StartIntakeHandler, SubmitIntakeHandler,
};
use crate::config::IntakeConfig;
use crate::domain::intake::IntakeSession;

/// Owns the current session and the handlers that act on it.
pub struct ConsoleRunner {
    session: IntakeSession,
    start: StartIntakeHandler,
    edit: EditFieldHandler,
    commit: CommitDraftGoalHandler,
    submit: SubmitIntakeHandler,
}

impl ConsoleRunner {
    pub fn new(config: IntakeConfig) -> Self {
        let start = StartIntakeHandler::new(config.clone());
        let (session, _) = start.handle();
        Self {
            session,
            start,
            edit: EditFieldHandler::new(config.clone()),
            commit: CommitDraftGoalHandler::new(config.clone()),
            submit: SubmitIntakeHandler::new(config),
        }
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    /// Applies one event and returns the resulting snapshot.
    pub fn dispatch(&mut self, event: InboundEvent) -> IntakeSnapshot {
        match event {
            InboundEvent::EditField { field, value } => self
                .edit
                .handle(&mut self.session, EditFieldCommand::new(field, value)),
            InboundEvent::CommitDraftGoal => self.commit.handle(&mut self.session),
            InboundEvent::Submit => self.submit.handle(&mut self.session),
            InboundEvent::NewSession => {
                let (session, snapshot) = self.start.handle();
                self.session = session;
                snapshot
            }
        }
    }

    /// Handles one raw input line.
    pub fn handle_line(&mut self, line: &str) -> OutboundMessage {
        match serde_json::from_str::<InboundEvent>(line) {
            Ok(event) => {
                debug!(intake_id = %self.session.id(), event = event_kind(&event), "Event received");
                self.dispatch(event).into()
            }
            Err(e) => {
                warn!(intake_id = %self.session.id(), error = %e, "Malformed event");
                OutboundMessage::malformed(e.to_string())
            }
        }
    }

    /// Reads events until end of input, writing one JSON line per event.
    ///
    /// Blank lines are skipped. Malformed lines produce an error line and the
    /// stream continues.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let message = self.handle_line(&line);
            serde_json::to_writer(&mut output, &message)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}

fn event_kind(event: &InboundEvent) -> &'static str {
    match event {
        InboundEvent::EditField { .. } => "edit_field",
        InboundEvent::CommitDraftGoal => "commit_draft_goal",
        InboundEvent::Submit => "submit",
        InboundEvent::NewSession => "new_session",
    }
}
