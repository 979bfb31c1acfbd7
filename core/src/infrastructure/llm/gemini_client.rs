use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::{ports::LLMClient, value_objects::ImagePayload},
};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        Some(text)
    }
}

fn json_generation_config(response_schema: serde_json::Value) -> GenerationConfig {
    GenerationConfig {
        response_mime_type: "application/json".to_string(),
        response_schema,
    }
}

impl GeminiLLMClient {
    pub fn new(api_key: Option<String>, model_name: String) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model_name,
            base_url: GEMINI_API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(config.gemini_api_key.clone(), config.gemini_model.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().ok_or(CoreError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key.
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        system_instruction: Option<String>,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part::Text { text }],
            }),
            generation_config: response_schema.map(json_generation_config),
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(image.data());

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type().to_string(),
                            data: base64_image,
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            system_instruction: None,
            generation_config: Some(json_generation_config(response_schema)),
        };

        self.call_gemini_api(request).await
    }
}
