mod common;

use axum::http::StatusCode;
use common::ApiContext;
use serde_json::Value;
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_liveness(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health/live").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_config_reports_llm_disabled(ctx: &mut ApiContext) {
    let response = ctx.server.get("/config").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["llm_enabled"], false);
    assert_eq!(body["llm_model"], "gemini-2.5-flash");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_openapi_document_is_served(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["paths"]["/diagnostic/sessions"].is_object());
}
