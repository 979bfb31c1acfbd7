use hairsphere_core::domain::consultation::prompts::WELCOME_MESSAGE;

use crate::application::http::{
    consultation::handlers::send_message::ConsultationReplyResponse,
    server::api_entities::response::Response,
};

#[utoipa::path(
    get,
    path = "/welcome",
    tag = "consultation",
    summary = "Get the consultant greeting",
    responses(
        (status = 200, body = ConsultationReplyResponse)
    ),
)]
pub async fn get_welcome() -> Response<ConsultationReplyResponse> {
    Response::OK(ConsultationReplyResponse {
        reply: WELCOME_MESSAGE.to_string(),
    })
}
