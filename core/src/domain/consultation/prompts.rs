use crate::domain::consultation::entities::ChatTurn;

pub const SYSTEM_INSTRUCTION: &str = r#"You are "HairSphere AI", a world-class trichologist and elite hair care specialist.
Your goal is to help users grow and maintain healthy hair with a sense of luxury and self-care.
You are knowledgeable about all hair types (Type 1A to 4C), porosity, and density.

Guidelines:
1. Tone: Sophisticated, premium, encouraging, and professional.
2. Provide actionable, science-backed advice.
3. If asked about routine, suggest specific product ingredients (e.g., "look for argan oil") rather than brand names unless asked.
4. Keep answers concise but informative.
5. The user's aesthetic is "Premium Mauve, Soft Pink, Gold & Navy". Feel free to use metaphors related to royalty, crowns, silk, rose petals, and luxury."#;

pub const WELCOME_MESSAGE: &str = "Hello! I'm HairSphere AI, your personal trichologist. Whether you need a new routine, product ingredient advice, or help identifying your hair porosity, I'm here to help. How is your hair feeling today?";

pub const API_KEY_MISSING_REPLY: &str = "Error: API Key not configured.";

pub const EMPTY_REPLY: &str = "I couldn't generate a response at this time.";

pub const APOLOGY_REPLY: &str = "Sorry, I'm having trouble connecting to the hair knowledge base right now. Please try again later.";

/// Flattens the history into a transcript ahead of the new query.
pub fn build_consultation_prompt(message: &str, history: &[ChatTurn]) -> String {
    let mut prompt = String::new();

    if !history.is_empty() {
        prompt.push_str("Previous conversation:\n");
        let transcript = history
            .iter()
            .map(|turn| format!("{}: {}", turn.role, turn.text))
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push_str(&transcript);
        prompt.push_str("\n\n");
    }

    prompt.push_str("User Query: ");
    prompt.push_str(message);
    prompt
}
