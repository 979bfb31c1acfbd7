use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use hairsphere_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;

/// A server with metrics off and no Gemini key, so nothing leaves the process.
pub struct ApiContext {
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::try_parse_from([
            "hairsphere-api",
            "--disable-metrics",
            "--gemini-api-key",
            "",
        ])
        .expect("test args should parse");

        let state = state(Arc::new(args)).await.expect("state should build");
        let router = router(state).expect("router should build");
        let server = TestServer::new(router).expect("test server should start");

        Self { server }
    }
}
