use thiserror::Error;

use super::question::QuestionId;

/// Contract violations between a caller and the diagnostic engine.
///
/// None of these are transient; callers should restart the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    #[error("Answer given for question '{received}' while '{expected}' is current")]
    InvalidQuestion {
        expected: QuestionId,
        received: String,
    },

    #[error("'{value}' is not a valid answer to question '{question}'")]
    InvalidValue { question: QuestionId, value: String },

    #[error("Answer set is incomplete, missing: {}", format_missing(.missing))]
    IncompleteAnswerSet { missing: Vec<QuestionId> },

    #[error("Diagnostic is already completed")]
    SessionCompleted,

    #[error("Diagnostic session not found")]
    SessionNotFound,
}

impl DiagnosticError {
    /// Stable machine tag, used by transports.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticError::InvalidQuestion { .. } => "E_INVALID_QUESTION",
            DiagnosticError::InvalidValue { .. } => "E_INVALID_VALUE",
            DiagnosticError::IncompleteAnswerSet { .. } => "E_INCOMPLETE_ANSWER_SET",
            DiagnosticError::SessionCompleted => "E_SESSION_COMPLETED",
            DiagnosticError::SessionNotFound => "E_SESSION_NOT_FOUND",
        }
    }
}

fn format_missing(missing: &[QuestionId]) -> String {
    missing
        .iter()
        .map(QuestionId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
