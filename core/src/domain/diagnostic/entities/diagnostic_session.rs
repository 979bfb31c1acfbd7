use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    diagnostic::{
        engine::DiagnosticEngine,
        entities::{QuestionId, errors::DiagnosticError},
        value_objects::{DiagnosticSessionSnapshot, SessionCommand},
    },
};

/// One user's run through the questionnaire. Never shared between users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticSession {
    pub id: Uuid,
    pub engine: DiagnosticEngine,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiagnosticSession {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            engine: DiagnosticEngine::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Runs `command` against the engine. On error nothing has changed.
    pub fn apply(&mut self, command: SessionCommand) -> Result<(), DiagnosticError> {
        match command {
            SessionCommand::Answer { question_id, value } => {
                let current = self
                    .engine
                    .current_question()
                    .ok_or(DiagnosticError::SessionCompleted)?;

                // Unknown ids are reported the same way as out-of-order ones.
                let question_id = question_id.parse::<QuestionId>().map_err(|_| {
                    DiagnosticError::InvalidQuestion {
                        expected: current.id,
                        received: question_id,
                    }
                })?;

                self.engine.answer(question_id, &value)?;
            }
            SessionCommand::GoBack => {
                if !self.engine.go_back() {
                    return Ok(());
                }
            }
            SessionCommand::Reset => self.engine.reset(),
        }

        self.touch();
        Ok(())
    }

    pub fn snapshot(&self) -> DiagnosticSessionSnapshot {
        let progress = self.engine.progress();

        DiagnosticSessionSnapshot {
            session_id: self.id,
            state: self.engine.state(),
            percent_complete: progress.percent(),
            progress,
            current_question: self.engine.current_question().cloned(),
            answers: self.engine.answers().as_map().clone(),
        }
    }
}

impl Default for DiagnosticSession {
    fn default() -> Self {
        Self::new()
    }
}
