use axum::extract::{Path, State};
use hairsphere_core::domain::diagnostic::{entities::DiagnosticResult, ports::DiagnosticService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DiagnosticResultResponse {
    pub data: DiagnosticResult,
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/result",
    tag = "diagnostic",
    summary = "Get the hair profile",
    description = "Classifies the session answers once every question has been answered",
    responses(
        (status = 200, body = DiagnosticResultResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown session"),
        (status = 422, body = ApiErrorResponse, description = "Questionnaire not finished")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Diagnostic session ID"),
    ),
)]
pub async fn get_result(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DiagnosticResultResponse>, ApiError> {
    let result = state
        .service
        .get_result(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiagnosticResultResponse { data: result }))
}
