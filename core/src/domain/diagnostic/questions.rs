use std::sync::LazyLock;

use crate::domain::diagnostic::entities::{Question, QuestionId, QuestionOption};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question {
            id: QuestionId::CurlPattern,
            text: "When your hair is air-dried without product, what is its natural shape?"
                .to_string(),
            description: None,
            options: vec![
                QuestionOption::new(
                    "Straight, no curl",
                    "Type 1",
                    Some("Creating a straight line"),
                ),
                QuestionOption::new("'S' shaped waves", "Type 2", Some("Gentle waves")),
                QuestionOption::new("Defined loops or corkscrews", "Type 3", Some("Springy curls")),
                QuestionOption::new("Tight coils or zig-zags", "Type 4", Some("Dense coils")),
            ],
        },
        Question {
            id: QuestionId::Porosity,
            text: "How does your hair react to water?".to_string(),
            description: Some(
                "Think about when you're in the shower or spraying water on dry hair.".to_string(),
            ),
            options: vec![
                QuestionOption::new(
                    "Water beads up/sits on top, takes forever to get wet",
                    "Low",
                    Some("💧"),
                ),
                QuestionOption::new(
                    "Gets wet easily, retains moisture well",
                    "Medium",
                    Some("✨"),
                ),
                QuestionOption::new(
                    "Absorbs water instantly but dries very fast",
                    "High",
                    Some("🧽"),
                ),
            ],
        },
        Question {
            id: QuestionId::Density,
            text: "Part your hair down the middle. How much scalp do you see?".to_string(),
            description: None,
            options: vec![
                QuestionOption::new("A lot of scalp is visible", "Low", Some("⚪")),
                QuestionOption::new("Some scalp is visible", "Medium", Some("🌗")),
                QuestionOption::new("Very little to no scalp is visible", "High", Some("⚫")),
            ],
        },
        Question {
            id: QuestionId::Texture,
            text: "Take a single strand between your fingers. How does it feel?".to_string(),
            description: None,
            options: vec![
                QuestionOption::new("Barely feel it (like silk)", "Fine", None),
                QuestionOption::new("Feels like a cotton thread", "Medium", None),
                QuestionOption::new("Feels rough or wiry", "Coarse", None),
            ],
        },
    ]
});

/// The questionnaire, in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question_count() -> usize {
    QUESTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_question_ids() {
        let ids: Vec<QuestionId> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, QuestionId::ALL.to_vec());
    }

    fn option_values(index: usize) -> Vec<&'static str> {
        questions()[index]
            .options
            .iter()
            .map(|option| option.value.as_str())
            .collect()
    }

    #[test]
    fn test_option_values_are_canonical_tokens() {
        assert_eq!(
            option_values(0),
            vec!["Type 1", "Type 2", "Type 3", "Type 4"]
        );
        assert_eq!(option_values(1), vec!["Low", "Medium", "High"]);
        assert_eq!(option_values(3), vec!["Fine", "Medium", "Coarse"]);
    }

    #[test]
    fn test_only_porosity_has_a_description() {
        let described: Vec<QuestionId> = questions()
            .iter()
            .filter(|q| q.description.is_some())
            .map(|q| q.id)
            .collect();
        assert_eq!(described, vec![QuestionId::Porosity]);
    }
}
