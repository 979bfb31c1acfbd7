use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hairsphere_core::domain::{
    common::entities::app_errors::CoreError, diagnostic::entities::errors::DiagnosticError,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Shown to users for any questionnaire contract violation.
pub const DIAGNOSTIC_RESTART_MESSAGE: &str =
    "Something went wrong, please restart the diagnostic.";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{detail}")]
    DiagnosticContract { code: &'static str, detail: String },
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid input".to_string()),
            CoreError::Diagnostic(DiagnosticError::SessionNotFound) => {
                ApiError::NotFound(DiagnosticError::SessionNotFound.to_string())
            }
            CoreError::Diagnostic(e) => ApiError::DiagnosticContract {
                code: e.code(),
                detail: e.to_string(),
            },
            CoreError::MissingApiKey
            | CoreError::ExternalServiceError(_)
            | CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, detail) = match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message, None)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", message, None),
            ApiError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "E_PAYLOAD_TOO_LARGE",
                message,
                None,
            ),
            ApiError::ValidationError(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "E_VALIDATION",
                message,
                None,
            ),
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E_INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::DiagnosticContract { code, detail } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                code,
                DIAGNOSTIC_RESTART_MESSAGE.to_string(),
                Some(detail),
            ),
        };

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message,
            detail,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
