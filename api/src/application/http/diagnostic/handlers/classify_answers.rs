use axum::extract::State;
use hairsphere_core::domain::diagnostic::{
    ports::DiagnosticService, value_objects::ClassifyAnswersInput,
};

use crate::application::http::{
    diagnostic::{
        handlers::get_result::DiagnosticResultResponse, validators::ClassifyAnswersRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/classify",
    tag = "diagnostic",
    summary = "Classify a complete answer set",
    description = "Stateless classification for clients that track answers themselves",
    request_body = ClassifyAnswersRequest,
    responses(
        (status = 200, body = DiagnosticResultResponse),
        (status = 422, body = ApiErrorResponse, description = "Answer set incomplete or holds an unknown value")
    ),
)]
pub async fn classify_answers(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ClassifyAnswersRequest>,
) -> Result<Response<DiagnosticResultResponse>, ApiError> {
    let result = state
        .service
        .classify_answers(ClassifyAnswersInput {
            curl_pattern: payload.curl_pattern,
            porosity: payload.porosity,
            density: payload.density,
            texture: payload.texture,
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiagnosticResultResponse { data: result }))
}
