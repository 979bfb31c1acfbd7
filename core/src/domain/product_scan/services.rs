use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnostic::ports::DiagnosticSessionRepository,
    llm::{ports::LLMClient, value_objects::ImagePayload},
    product_scan::{
        entities::{ProductAnalysisResult, ProductScanOutcome},
        ports::ProductScanService,
        prompts::SCAN_INSTRUCTION,
        schema::get_product_analysis_schema,
    },
};

/// Decodes the model's JSON. Anything that does not match the schema is unanalyzable.
fn parse_analysis(raw_response: &str) -> ProductScanOutcome {
    if raw_response.trim().is_empty() {
        warn!("LLM returned an empty product analysis");
        return ProductScanOutcome::Unanalyzable;
    }

    match serde_json::from_str::<ProductAnalysisResult>(raw_response) {
        Ok(result) => ProductScanOutcome::Analyzed(result),
        Err(e) => {
            error!("Failed to parse product analysis response: {}", e);
            ProductScanOutcome::Unanalyzable
        }
    }
}

impl<LLM, DS> ProductScanService for Service<LLM, DS>
where
    LLM: LLMClient,
    DS: DiagnosticSessionRepository,
{
    #[instrument(skip_all, fields(image_bytes = image.len(), mime_type = %image.mime_type()))]
    async fn analyze_product_image(
        &self,
        image: ImagePayload,
    ) -> Result<ProductScanOutcome, CoreError> {
        let raw_response = match self
            .llm_client
            .generate_with_image(
                SCAN_INSTRUCTION.to_string(),
                image,
                get_product_analysis_schema(),
            )
            .await
        {
            Ok(raw_response) => raw_response,
            Err(CoreError::MissingApiKey) => {
                error!("API_KEY is missing from environment variables.");
                return Ok(ProductScanOutcome::Unanalyzable);
            }
            Err(e) => {
                error!("Product Analysis Error: {}", e);
                return Ok(ProductScanOutcome::Unanalyzable);
            }
        };

        let outcome = parse_analysis(&raw_response);
        if let ProductScanOutcome::Analyzed(result) = &outcome {
            info!(
                product_name = %result.product_name,
                ingredients = result.ingredients.len(),
                "analyzed product image"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{llm::ports::MockLLMClient, product_scan::entities::Suitability},
        infrastructure::diagnostic::InMemoryDiagnosticSessionRepository,
    };

    const VALID_RESPONSE: &str = r#"{
        "productName": "Silk Repair Mask",
        "overallVerdict": "Mostly gentle, watch the fragrance.",
        "ingredients": [
            { "name": "Shea Butter", "function": "Emollient", "suitability": "Good", "description": "Seals moisture." },
            { "name": "Parfum", "function": "Fragrance", "suitability": "Caution", "description": "Can irritate." },
            { "name": "Water", "function": "Solvent", "suitability": "Neutral", "description": "Base." }
        ]
    }"#;

    fn service_with(
        llm: MockLLMClient,
    ) -> Service<MockLLMClient, InMemoryDiagnosticSessionRepository> {
        Service::new(llm, InMemoryDiagnosticSessionRepository::new())
    }

    fn image() -> ImagePayload {
        ImagePayload::new(vec![0xFF, 0xD8, 0xFF], Some("image/jpeg")).unwrap()
    }

    #[tokio::test]
    async fn test_valid_response_is_analyzed() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, image, schema| {
                prompt == SCAN_INSTRUCTION
                    && image.mime_type() == "image/jpeg"
                    && schema["required"][0] == "productName"
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(VALID_RESPONSE.to_string()) }));

        let outcome = service_with(llm)
            .analyze_product_image(image())
            .await
            .unwrap();

        let ProductScanOutcome::Analyzed(result) = outcome else {
            panic!("expected an analysis");
        };
        assert_eq!(result.product_name, "Silk Repair Mask");
        assert_eq!(result.ingredients[1].suitability, Suitability::Caution);

        let breakdown = result.count_by_suitability();
        assert_eq!(
            (breakdown.good, breakdown.caution, breakdown.avoid, breakdown.neutral),
            (1, 1, 0, 1)
        );
    }

    #[tokio::test]
    async fn test_unknown_suitability_is_unanalyzable() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async {
                Ok(VALID_RESPONSE.replace("\"Caution\"", "\"Maybe\""))
            })
        });

        let outcome = service_with(llm)
            .analyze_product_image(image())
            .await
            .unwrap();
        assert_eq!(outcome, ProductScanOutcome::Unanalyzable);
    }

    #[tokio::test]
    async fn test_llm_failure_is_unanalyzable() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let outcome = service_with(llm)
            .analyze_product_image(image())
            .await
            .unwrap();
        assert_eq!(outcome, ProductScanOutcome::Unanalyzable);
    }

    #[test]
    fn test_empty_and_malformed_responses() {
        assert_eq!(parse_analysis("  "), ProductScanOutcome::Unanalyzable);
        assert_eq!(parse_analysis("{\"productName\": 3}"), ProductScanOutcome::Unanalyzable);
    }
}
