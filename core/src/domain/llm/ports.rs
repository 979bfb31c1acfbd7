use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, llm::value_objects::ImagePayload};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Plain text generation. A `response_schema` switches the reply to JSON.
    fn generate_with_text(
        &self,
        prompt: String,
        system_instruction: Option<String>,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
