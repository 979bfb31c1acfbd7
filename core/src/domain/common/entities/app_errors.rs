use thiserror::Error;

use crate::domain::diagnostic::entities::errors::DiagnosticError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,

    #[error("LLM API key is not configured")]
    MissingApiKey,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
}
