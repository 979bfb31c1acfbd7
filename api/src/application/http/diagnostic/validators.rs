use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, message = "questionId must not be empty"))]
    #[schema(example = "curlPattern")]
    pub question_id: String,
    #[validate(length(min = 1, message = "value must not be empty"))]
    #[schema(example = "Type 3")]
    pub value: String,
}

/// Answers assembled by the client; omitted fields are reported as missing.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyAnswersRequest {
    #[schema(example = "Type 4")]
    pub curl_pattern: Option<String>,
    #[schema(example = "High")]
    pub porosity: Option<String>,
    pub density: Option<String>,
    pub texture: Option<String>,
}
