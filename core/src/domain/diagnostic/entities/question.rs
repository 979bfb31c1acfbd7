use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Question identifiers, declared in presentation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    CurlPattern,
    Porosity,
    Density,
    Texture,
}

impl QuestionId {
    pub const ALL: [QuestionId; 4] = [
        QuestionId::CurlPattern,
        QuestionId::Porosity,
        QuestionId::Density,
        QuestionId::Texture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::CurlPattern => "curlPattern",
            QuestionId::Porosity => "porosity",
            QuestionId::Density => "density",
            QuestionId::Texture => "texture",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curlPattern" | "curl-pattern" => Ok(QuestionId::CurlPattern),
            "porosity" => Ok(QuestionId::Porosity),
            "density" => Ok(QuestionId::Density),
            "texture" => Ok(QuestionId::Texture),
            _ => Err(()),
        }
    }
}

/// A selectable answer. `label` is display-only, `value` is the token fed back to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl QuestionOption {
    pub fn new(label: &str, value: &str, icon: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn accepts(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}
