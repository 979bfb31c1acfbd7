use hairsphere_core::domain::consultation::entities::ChatTurn;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SendMessageRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "message must be between 1 and 5000 characters"
    ))]
    pub message: String,
    /// Earlier turns, oldest first.
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}
