use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::diagnostic::entities::{Question, QuestionId};

/// Answers collected so far, keyed by question. Values are raw option tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }

    /// Records `value` for `id`, replacing any earlier answer.
    pub fn insert(&mut self, id: QuestionId, value: impl Into<String>) {
        self.answers.insert(id, value.into());
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Unanswered ids, in presentation order.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<QuestionId, String> {
        &self.answers
    }
}

impl<V: Into<String>> FromIterator<(QuestionId, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, V)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (id, value) in iter {
            set.insert(id, value);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EngineState {
    AskingQuestion { index: usize },
    Completed,
}

/// What the caller should do after a successful answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnswerOutcome {
    Continue {
        #[serde(rename = "nextQuestion")]
        next_question: Question,
    },
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.answered * 100) / self.total) as u8
    }
}

/// Serializable view of a session for transports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticSessionSnapshot {
    pub session_id: Uuid,
    pub state: EngineState,
    pub progress: Progress,
    pub percent_complete: u8,
    pub current_question: Option<Question>,
    pub answers: BTreeMap<QuestionId, String>,
}

/// A change to a stored session, applied in one step by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Answer { question_id: String, value: String },
    GoBack,
    Reset,
}

#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    pub session_id: Uuid,
    pub question_id: String,
    pub value: String,
}

/// Stateless classification input; absent fields surface as `IncompleteAnswerSet`.
#[derive(Debug, Clone, Default)]
pub struct ClassifyAnswersInput {
    pub curl_pattern: Option<String>,
    pub porosity: Option<String>,
    pub density: Option<String>,
    pub texture: Option<String>,
}

impl From<ClassifyAnswersInput> for AnswerSet {
    fn from(input: ClassifyAnswersInput) -> Self {
        [
            (QuestionId::CurlPattern, input.curl_pattern),
            (QuestionId::Porosity, input.porosity),
            (QuestionId::Density, input.density),
            (QuestionId::Texture, input.texture),
        ]
        .into_iter()
        .filter_map(|(id, value)| value.map(|value| (id, value)))
        .collect()
    }
}
