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
    post,
    path = "/sessions/{session_id}/back",
    tag = "diagnostic",
    summary = "Go back one question",
    description = "Steps back to the previous question; answers are kept until overwritten",
    responses(
        (status = 200, body = DiagnosticSessionResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Diagnostic session ID"),
    ),
)]
pub async fn go_back(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DiagnosticSessionResponse>, ApiError> {
    let session = state
        .service
        .go_back(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiagnosticSessionResponse {
        data: session.snapshot(),
    }))
}
