use axum::extract::{Path, State};
use hairsphere_core::domain::diagnostic::{
    ports::DiagnosticService,
    value_objects::{AnswerOutcome, AnswerQuestionInput, DiagnosticSessionSnapshot},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    diagnostic::validators::SubmitAnswerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SubmitAnswerResponse {
    pub data: DiagnosticSessionSnapshot,
    pub outcome: AnswerOutcome,
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/answers",
    tag = "diagnostic",
    summary = "Answer the current question",
    description = "Records an answer for the current question and advances the session",
    request_body = SubmitAnswerRequest,
    responses(
        (status = 200, body = SubmitAnswerResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown session"),
        (status = 422, body = ApiErrorResponse, description = "Answer does not match the current question")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Diagnostic session ID"),
    ),
)]
pub async fn submit_answer(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitAnswerRequest>,
) -> Result<Response<SubmitAnswerResponse>, ApiError> {
    let (session, outcome) = state
        .service
        .answer_question(AnswerQuestionInput {
            session_id,
            question_id: payload.question_id,
            value: payload.value,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SubmitAnswerResponse {
        data: session.snapshot(),
        outcome,
    }))
}
