use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub app_version: String,
    pub llm_enabled: bool,
    pub llm_model: String,
}

/// Public, non-secret runtime settings for the frontend.
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    let llm_enabled = state
        .args
        .llm
        .gemini_api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        llm_enabled,
        llm_model: state.args.llm.gemini_model.clone(),
    })
}
