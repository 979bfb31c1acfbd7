use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::hair_profile::{Density, HairType, Porosity, Texture};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub routine: String,
    pub ingredients_to_love: Vec<String>,
    pub ingredients_to_avoid: Vec<String>,
    pub styling_tip: String,
}

/// Outcome of a complete questionnaire.
///
/// `density` and `texture` are echoed back but do not feed into `recommendations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub hair_type: HairType,
    pub porosity: Porosity,
    pub density: Density,
    pub texture: Texture,
    pub recommendations: Recommendations,
}
