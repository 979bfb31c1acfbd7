use crate::domain::consultation::entities::ChatTurn;

#[derive(Debug, Clone)]
pub struct GenerateAdviceInput {
    pub message: String,
    pub history: Vec<ChatTurn>,
}
