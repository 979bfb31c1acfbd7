use super::handlers::{
    classify_answers::{__path_classify_answers, classify_answers},
    delete_session::{__path_delete_session, delete_session},
    get_questions::{__path_get_questions, get_questions},
    get_result::{__path_get_result, get_result},
    get_session::{__path_get_session, get_session},
    go_back::{__path_go_back, go_back},
    reset_session::{__path_reset_session, reset_session},
    start_session::{__path_start_session, start_session},
    submit_answer::{__path_submit_answer, submit_answer},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_questions,
    classify_answers,
    start_session,
    get_session,
    delete_session,
    submit_answer,
    go_back,
    reset_session,
    get_result
))]
pub struct DiagnosticApiDoc;

pub fn diagnostic_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/diagnostic/questions", state.args.server.root_path),
            get(get_questions),
        )
        .route(
            &format!("{}/diagnostic/classify", state.args.server.root_path),
            post(classify_answers),
        )
        .route(
            &format!("{}/diagnostic/sessions", state.args.server.root_path),
            post(start_session),
        )
        .route(
            &format!(
                "{}/diagnostic/sessions/{{session_id}}",
                state.args.server.root_path
            ),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!(
                "{}/diagnostic/sessions/{{session_id}}/answers",
                state.args.server.root_path
            ),
            post(submit_answer),
        )
        .route(
            &format!(
                "{}/diagnostic/sessions/{{session_id}}/back",
                state.args.server.root_path
            ),
            post(go_back),
        )
        .route(
            &format!(
                "{}/diagnostic/sessions/{{session_id}}/reset",
                state.args.server.root_path
            ),
            post(reset_session),
        )
        .route(
            &format!(
                "{}/diagnostic/sessions/{{session_id}}/result",
                state.args.server.root_path
            ),
            get(get_result),
        )
}
