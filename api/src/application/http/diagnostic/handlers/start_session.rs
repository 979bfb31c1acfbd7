use axum::extract::State;
use hairsphere_core::domain::diagnostic::{
    ports::DiagnosticService, value_objects::DiagnosticSessionSnapshot,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DiagnosticSessionResponse {
    pub data: DiagnosticSessionSnapshot,
}

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "diagnostic",
    summary = "Start a diagnostic session",
    description = "Creates a fresh session positioned on the first question",
    responses(
        (status = 201, body = DiagnosticSessionResponse)
    ),
)]
pub async fn start_session(
    State(state): State<AppState>,
) -> Result<Response<DiagnosticSessionResponse>, ApiError> {
    let session = state
        .service
        .start_session()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DiagnosticSessionResponse {
        data: session.snapshot(),
    }))
}
