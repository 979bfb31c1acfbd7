use tracing::trace;

use crate::domain::diagnostic::{
    classifier::classify,
    entities::{DiagnosticResult, Question, QuestionId, errors::DiagnosticError},
    questions::{question_count, questions},
    value_objects::{AnswerOutcome, AnswerSet, EngineState, Progress},
};

/// Walks a caller through the questionnaire one answer at a time.
///
/// States are `AskingQuestion(0..=3)` and `Completed`; only [`reset`](Self::reset)
/// leaves `Completed`, apart from stepping back one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticEngine {
    index: usize,
    answers: AnswerSet,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self {
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        if self.is_completed() {
            EngineState::Completed
        } else {
            EngineState::AskingQuestion { index: self.index }
        }
    }

    pub fn is_completed(&self) -> bool {
        self.index >= question_count()
    }

    /// `None` once every question has been answered.
    pub fn current_question(&self) -> Option<&'static Question> {
        questions().get(self.index)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.index.min(question_count()),
            total: question_count(),
        }
    }

    pub fn answer(
        &mut self,
        question_id: QuestionId,
        value: &str,
    ) -> Result<AnswerOutcome, DiagnosticError> {
        let current = self
            .current_question()
            .ok_or(DiagnosticError::SessionCompleted)?;

        if current.id != question_id {
            return Err(DiagnosticError::InvalidQuestion {
                expected: current.id,
                received: question_id.to_string(),
            });
        }

        if !current.accepts(value) {
            return Err(DiagnosticError::InvalidValue {
                question: question_id,
                value: value.to_string(),
            });
        }

        self.answers.insert(question_id, value);
        self.index += 1;
        trace!(question = %question_id, value, index = self.index, "recorded answer");

        Ok(self.next_step())
    }

    /// What the caller faces next: the current question, or the end.
    pub fn next_step(&self) -> AnswerOutcome {
        match self.current_question() {
            Some(next) => AnswerOutcome::Continue {
                next_question: next.clone(),
            },
            None => AnswerOutcome::Complete,
        }
    }

    /// Steps back one question, keeping recorded answers until they are overwritten.
    /// Returns `false` when already on the first question.
    pub fn go_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index = self.index.min(question_count()) - 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.answers = AnswerSet::new();
    }

    /// Classifies this engine's answers. Only valid once `Completed`.
    pub fn result(&self) -> Result<DiagnosticResult, DiagnosticError> {
        if !self.is_completed() {
            let missing = questions()[self.index..].iter().map(|q| q.id).collect();
            return Err(DiagnosticError::IncompleteAnswerSet { missing });
        }
        classify(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(engine: &mut DiagnosticEngine, values: [&str; 4]) -> AnswerOutcome {
        let mut outcome = AnswerOutcome::Complete;
        for (id, value) in QuestionId::ALL.into_iter().zip(values) {
            outcome = engine.answer(id, value).unwrap();
        }
        outcome
    }

    #[test]
    fn test_fresh_engine_asks_first_question() {
        let engine = DiagnosticEngine::new();
        assert_eq!(engine.state(), EngineState::AskingQuestion { index: 0 });
        assert_eq!(
            engine.current_question().map(|q| q.id),
            Some(QuestionId::CurlPattern)
        );
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn test_answering_in_order_reaches_completed() {
        let mut engine = DiagnosticEngine::new();

        let outcome = engine.answer(QuestionId::CurlPattern, "Type 4").unwrap();
        match outcome {
            AnswerOutcome::Continue { next_question } => {
                assert_eq!(next_question.id, QuestionId::Porosity)
            }
            AnswerOutcome::Complete => panic!("expected continue"),
        }
        assert_eq!(engine.state(), EngineState::AskingQuestion { index: 1 });

        engine.answer(QuestionId::Porosity, "High").unwrap();
        engine.answer(QuestionId::Density, "High").unwrap();
        let last = engine.answer(QuestionId::Texture, "Coarse").unwrap();

        assert_eq!(last, AnswerOutcome::Complete);
        assert_eq!(engine.state(), EngineState::Completed);
        assert!(engine.current_question().is_none());
        assert_eq!(engine.progress().answered, 4);
    }

    #[test]
    fn test_out_of_order_answer_is_invalid_question() {
        let mut engine = DiagnosticEngine::new();
        let err = engine.answer(QuestionId::Porosity, "Low").unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidQuestion {
                expected: QuestionId::CurlPattern,
                received: "porosity".to_string()
            }
        );
        assert_eq!(engine.state(), EngineState::AskingQuestion { index: 0 });
    }

    #[test]
    fn test_unknown_value_is_invalid_value() {
        let mut engine = DiagnosticEngine::new();
        let err = engine
            .answer(QuestionId::CurlPattern, "NotARealValue")
            .unwrap_err();
        assert!(matches!(err, DiagnosticError::InvalidValue { .. }));
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn test_porosity_token_is_not_accepted_for_texture() {
        let mut engine = DiagnosticEngine::new();
        answer_all_but_last(&mut engine);
        let err = engine.answer(QuestionId::Texture, "Low").unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidValue {
                question: QuestionId::Texture,
                value: "Low".to_string()
            }
        );
    }

    fn answer_all_but_last(engine: &mut DiagnosticEngine) {
        engine.answer(QuestionId::CurlPattern, "Type 1").unwrap();
        engine.answer(QuestionId::Porosity, "Medium").unwrap();
        engine.answer(QuestionId::Density, "Medium").unwrap();
    }

    #[test]
    fn test_answer_after_completion_fails() {
        let mut engine = DiagnosticEngine::new();
        answer_all(&mut engine, ["Type 1", "Low", "Low", "Fine"]);
        assert_eq!(
            engine.answer(QuestionId::Texture, "Fine"),
            Err(DiagnosticError::SessionCompleted)
        );
    }

    #[test]
    fn test_reset_discards_previous_session() {
        let mut engine = DiagnosticEngine::new();
        answer_all(&mut engine, ["Type 2", "Low", "Low", "Fine"]);
        engine.reset();

        assert_eq!(engine, DiagnosticEngine::new());

        answer_all(&mut engine, ["Type 4", "High", "High", "Coarse"]);
        let result = engine.result().unwrap();
        assert_eq!(
            result.recommendations.ingredients_to_avoid,
            vec!["High pH Shampoos"]
        );
    }

    #[test]
    fn test_result_before_completion_lists_remaining_questions() {
        let mut engine = DiagnosticEngine::new();
        engine.answer(QuestionId::CurlPattern, "Type 3").unwrap();
        engine.answer(QuestionId::Porosity, "Low").unwrap();
        assert_eq!(
            engine.result(),
            Err(DiagnosticError::IncompleteAnswerSet {
                missing: vec![QuestionId::Density, QuestionId::Texture]
            })
        );
    }

    #[test]
    fn test_go_back_from_first_question_is_noop() {
        let mut engine = DiagnosticEngine::new();
        assert!(!engine.go_back());
        assert_eq!(engine.state(), EngineState::AskingQuestion { index: 0 });
    }

    #[test]
    fn test_go_back_then_reanswer_overwrites() {
        let mut engine = DiagnosticEngine::new();
        answer_all(&mut engine, ["Type 3", "Low", "Low", "Fine"]);

        assert!(engine.go_back());
        assert_eq!(engine.state(), EngineState::AskingQuestion { index: 3 });
        assert!(engine.go_back());
        assert!(engine.go_back());
        assert_eq!(
            engine.current_question().map(|q| q.id),
            Some(QuestionId::Porosity)
        );
        assert_eq!(engine.answers().get(QuestionId::Porosity), Some("Low"));

        engine.answer(QuestionId::Porosity, "High").unwrap();
        engine.answer(QuestionId::Density, "Low").unwrap();
        assert_eq!(
            engine.answer(QuestionId::Texture, "Fine").unwrap(),
            AnswerOutcome::Complete
        );
        assert_eq!(engine.result().unwrap().porosity.as_str(), "High");
    }
}
