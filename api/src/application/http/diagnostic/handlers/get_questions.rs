use axum::extract::State;
use hairsphere_core::domain::diagnostic::{entities::Question, ports::DiagnosticService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct GetQuestionsResponse {
    pub data: Vec<Question>,
}

#[utoipa::path(
    get,
    path = "/questions",
    tag = "diagnostic",
    summary = "List diagnostic questions",
    description = "Returns the questionnaire in presentation order",
    responses(
        (status = 200, body = GetQuestionsResponse)
    ),
)]
pub async fn get_questions(State(state): State<AppState>) -> Response<GetQuestionsResponse> {
    Response::OK(GetQuestionsResponse {
        data: state.service.list_questions(),
    })
}
