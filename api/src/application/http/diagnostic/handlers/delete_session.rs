use axum::extract::{Path, State};
use hairsphere_core::domain::diagnostic::ports::DiagnosticService;
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
pub struct DeleteSessionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/sessions/{session_id}",
    tag = "diagnostic",
    summary = "Discard a diagnostic session",
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown session")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Diagnostic session ID"),
    ),
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    state
        .service
        .delete_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSessionResponse {
        message: format!("Diagnostic session {session_id} deleted"),
    }))
}
