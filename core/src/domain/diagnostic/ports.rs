use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnostic::{
        entities::{DiagnosticResult, DiagnosticSession, Question},
        value_objects::{AnswerOutcome, AnswerQuestionInput, ClassifyAnswersInput, SessionCommand},
    },
};

/// Storage for in-progress diagnostic sessions
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSessionRepository: Send + Sync {
    fn create(
        &self,
        session: DiagnosticSession,
    ) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<DiagnosticSession>, CoreError>> + Send;

    /// Applies `command` to the stored session as a single step, so concurrent
    /// commands on one session cannot overwrite each other. A rejected command
    /// leaves the stored session unchanged.
    fn update(
        &self,
        session_id: Uuid,
        command: SessionCommand,
    ) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    /// Returns `false` when no session had that id.
    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for the hair diagnostic questionnaire
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticService: Send + Sync {
    fn list_questions(&self) -> Vec<Question>;

    /// Stateless classification of an externally assembled answer set.
    fn classify_answers(&self, input: ClassifyAnswersInput)
    -> Result<DiagnosticResult, CoreError>;

    fn start_session(&self) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    fn answer_question(
        &self,
        input: AnswerQuestionInput,
    ) -> impl Future<Output = Result<(DiagnosticSession, AnswerOutcome), CoreError>> + Send;

    fn go_back(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    fn reset_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<DiagnosticSession, CoreError>> + Send;

    fn get_result(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<DiagnosticResult, CoreError>> + Send;

    fn delete_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
