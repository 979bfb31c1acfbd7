use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::ImagePayload,
    product_scan::entities::ProductScanOutcome,
};

/// Service trait for the product ingredient scanner
#[cfg_attr(test, mockall::automock)]
pub trait ProductScanService: Send + Sync {
    fn analyze_product_image(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<ProductScanOutcome, CoreError>> + Send;
}
