use axum::extract::State;
use hairsphere_core::domain::consultation::{
    ports::ConsultationService, value_objects::GenerateAdviceInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    consultation::validators::SendMessageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ConsultationReplyResponse {
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/messages",
    tag = "consultation",
    summary = "Ask the hair consultant",
    description = "Sends a message with prior turns. Provider failures come back as a displayable apology, never as an error status",
    request_body = SendMessageRequest,
    responses(
        (status = 200, body = ConsultationReplyResponse),
        (status = 422, body = ApiErrorResponse, description = "Empty or oversized message")
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageRequest>,
) -> Result<Response<ConsultationReplyResponse>, ApiError> {
    let reply = state
        .service
        .generate_advice(GenerateAdviceInput {
            message: payload.message,
            history: payload.history,
        })
        .await;

    Ok(Response::OK(ConsultationReplyResponse { reply }))
}
