use axum::extract::{Path, State};
use hairsphere_core::domain::diagnostic::ports::DiagnosticService;
use uuid::Uuid;

use crate::application::http::{
    diagnostic::handlers::start_session::DiagnosticSessionResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    tag = "diagnostic",
    summary = "Get a diagnostic session",
    description = "Returns the current question, progress and answers so far",
    responses(
        (status = 200, body = DiagnosticSessionResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Diagnostic session ID"),
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DiagnosticSessionResponse>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiagnosticSessionResponse {
        data: session.snapshot(),
    }))
}
