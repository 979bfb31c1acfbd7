use super::handlers::{
    get_welcome::{__path_get_welcome, get_welcome},
    send_message::{__path_send_message, send_message},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_welcome, send_message))]
pub struct ConsultationApiDoc;

pub fn consultation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/consultation/welcome", state.args.server.root_path),
            get(get_welcome),
        )
        .route(
            &format!("{}/consultation/messages", state.args.server.root_path),
            post(send_message),
        )
}
