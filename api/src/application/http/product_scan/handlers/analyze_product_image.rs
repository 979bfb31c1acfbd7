use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use hairsphere_core::domain::{
    llm::value_objects::ImagePayload,
    product_scan::{
        entities::{ProductAnalysisResult, ProductScanOutcome, SuitabilityBreakdown},
        ports::ProductScanService,
        prompts::UNANALYZABLE_MESSAGE,
    },
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Analyzed,
    Unanalyzable,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ProductScanResponse {
    pub status: ScanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProductAnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<SuitabilityBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<ProductScanOutcome> for ProductScanResponse {
    fn from(outcome: ProductScanOutcome) -> Self {
        match outcome {
            ProductScanOutcome::Analyzed(result) => Self {
                status: ScanStatus::Analyzed,
                breakdown: Some(result.count_by_suitability()),
                data: Some(result),
                message: None,
            },
            ProductScanOutcome::Unanalyzable => Self {
                status: ScanStatus::Unanalyzable,
                data: None,
                breakdown: None,
                message: Some(UNANALYZABLE_MESSAGE.to_string()),
            },
        }
    }
}

fn multipart_error(context: &str, e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }
    ApiError::BadRequest(format!("{}: {}", context, e))
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "product-scan",
    summary = "Analyze a product ingredients photo",
    description = "Reads the ingredients list from an uploaded image and rates each ingredient for hair health",
    request_body(content_type = "multipart/form-data", description = "Multipart form with an `image` file field"),
    responses(
        (status = 200, body = ProductScanResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing or unreadable image"),
        (status = 413, body = ApiErrorResponse, description = "Image larger than 10MB")
    ),
)]
pub async fn analyze_product_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ProductScanResponse>, ApiError> {
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read image", e))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        debug!(size = data.len(), mime_type = ?mime_type, "received product image");

        image = Some(
            ImagePayload::new(data, mime_type.as_deref()).map_err(|_| {
                ApiError::BadRequest("Image field must be a non-empty image file".to_string())
            })?,
        );
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .analyze_product_image(image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductScanResponse::from(outcome)))
}
