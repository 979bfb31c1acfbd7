use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hair-health impact of a cosmetic ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Suitability {
    Good,
    Caution,
    Avoid,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub name: String,
    pub function: String,
    pub suitability: Suitability,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysisResult {
    pub product_name: String,
    pub overall_verdict: String,
    pub ingredients: Vec<IngredientAnalysis>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuitabilityBreakdown {
    pub good: usize,
    pub caution: usize,
    pub avoid: usize,
    pub neutral: usize,
}

impl ProductAnalysisResult {
    pub fn count_by_suitability(&self) -> SuitabilityBreakdown {
        self.ingredients
            .iter()
            .fold(SuitabilityBreakdown::default(), |mut acc, ingredient| {
                match ingredient.suitability {
                    Suitability::Good => acc.good += 1,
                    Suitability::Caution => acc.caution += 1,
                    Suitability::Avoid => acc.avoid += 1,
                    Suitability::Neutral => acc.neutral += 1,
                }
                acc
            })
    }
}

/// Either a structured analysis or an explicit signal that the image could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductScanOutcome {
    Analyzed(ProductAnalysisResult),
    Unanalyzable,
}
