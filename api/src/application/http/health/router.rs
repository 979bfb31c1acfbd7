use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::application::http::server::app_state::AppState;

async fn live() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(live))
}
