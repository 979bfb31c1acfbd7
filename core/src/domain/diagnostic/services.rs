use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnostic::{
        classifier::classify,
        entities::{DiagnosticResult, DiagnosticSession, Question, errors::DiagnosticError},
        ports::{DiagnosticService, DiagnosticSessionRepository},
        questions::questions,
        value_objects::{
            AnswerOutcome, AnswerQuestionInput, AnswerSet, ClassifyAnswersInput, SessionCommand,
        },
    },
    llm::ports::LLMClient,
};

fn log_rejection(error: &CoreError) {
    match error {
        CoreError::Diagnostic(DiagnosticError::SessionNotFound) => {}
        CoreError::Diagnostic(e) => warn!(code = e.code(), "rejected diagnostic request: {}", e),
        _ => {}
    }
}

impl<LLM, DS> Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    async fn load_session(&self, session_id: Uuid) -> Result<DiagnosticSession, CoreError> {
        self.diagnostic_session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::Diagnostic(DiagnosticError::SessionNotFound))
    }

    async fn update_session(
        &self,
        session_id: Uuid,
        command: SessionCommand,
    ) -> Result<DiagnosticSession, CoreError> {
        self.diagnostic_session_repository
            .update(session_id, command)
            .await
            .inspect_err(log_rejection)
    }
}

impl<LLM, DS> DiagnosticService for Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    fn list_questions(&self) -> Vec<Question> {
        questions().to_vec()
    }

    fn classify_answers(&self, input: ClassifyAnswersInput) -> Result<DiagnosticResult, CoreError> {
        let answers = AnswerSet::from(input);
        classify(&answers)
            .map_err(CoreError::from)
            .inspect_err(log_rejection)
    }

    #[instrument(skip(self))]
    async fn start_session(&self) -> Result<DiagnosticSession, CoreError> {
        let session = self
            .diagnostic_session_repository
            .create(DiagnosticSession::new())
            .await?;

        info!(session_id = %session.id, "started diagnostic session");
        Ok(session)
    }

    #[instrument(skip(self))]
    async fn get_session(&self, session_id: Uuid) -> Result<DiagnosticSession, CoreError> {
        self.load_session(session_id).await
    }

    #[instrument(
        skip(self),
        fields(session_id = %input.session_id, question_id = %input.question_id)
    )]
    async fn answer_question(
        &self,
        input: AnswerQuestionInput,
    ) -> Result<(DiagnosticSession, AnswerOutcome), CoreError> {
        let session = self
            .update_session(
                input.session_id,
                SessionCommand::Answer {
                    question_id: input.question_id,
                    value: input.value,
                },
            )
            .await?;

        let outcome = session.engine.next_step();
        if outcome == AnswerOutcome::Complete {
            info!(session_id = %session.id, "diagnostic session completed");
        }

        Ok((session, outcome))
    }

    #[instrument(skip(self))]
    async fn go_back(&self, session_id: Uuid) -> Result<DiagnosticSession, CoreError> {
        self.update_session(session_id, SessionCommand::GoBack).await
    }

    #[instrument(skip(self))]
    async fn reset_session(&self, session_id: Uuid) -> Result<DiagnosticSession, CoreError> {
        self.update_session(session_id, SessionCommand::Reset).await
    }

    #[instrument(skip(self))]
    async fn get_result(&self, session_id: Uuid) -> Result<DiagnosticResult, CoreError> {
        let session = self.load_session(session_id).await?;

        session
            .engine
            .result()
            .map_err(CoreError::from)
            .inspect_err(log_rejection)
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if !self.diagnostic_session_repository.delete(session_id).await? {
            return Err(DiagnosticError::SessionNotFound.into());
        }

        info!(%session_id, "discarded diagnostic session");
        Ok(())
    }
}
