use super::handlers::analyze_product_image::{
    __path_analyze_product_image, MAX_IMAGE_SIZE, analyze_product_image,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Room for multipart boundaries and headers on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_product_image))]
pub struct ProductScanApiDoc;

pub fn product_scan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/product-scan/image", state.args.server.root_path),
        post(analyze_product_image)
            .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
    )
}
