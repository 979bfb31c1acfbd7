use std::str::FromStr;

use tracing::debug;

use crate::domain::diagnostic::{
    entities::{
        Density, DiagnosticResult, HairType, Porosity, QuestionId, Recommendations, Texture,
        errors::DiagnosticError,
    },
    value_objects::AnswerSet,
};

struct PorosityCare {
    routine: &'static str,
    ingredients_to_love: &'static [&'static str],
    ingredients_to_avoid: &'static [&'static str],
}

struct CurlCare {
    routine_suffix: Option<&'static str>,
    styling_tip: &'static str,
    extra_ingredient_to_avoid: Option<&'static str>,
}

fn porosity_care(porosity: Porosity) -> PorosityCare {
    match porosity {
        Porosity::Low => PorosityCare {
            routine: "Use heat when deep conditioning to open cuticles. Apply products to soaking wet hair. ",
            ingredients_to_love: &[
                "Argan Oil",
                "Grapeseed Oil",
                "Jojoba Oil",
                "Humectants (Glycerin)",
            ],
            ingredients_to_avoid: &["Heavy Butters (Shea)", "Too much Protein"],
        },
        Porosity::High => PorosityCare {
            routine: "Focus on protein treatments to fill gaps in the cuticle. Seal moisture with heavier oils/butters (LCO Method). ",
            ingredients_to_love: &[
                "Shea Butter",
                "Castor Oil",
                "Hydrolyzed Protein",
                "Aloe Vera",
            ],
            ingredients_to_avoid: &["High pH Shampoos"],
        },
        Porosity::Medium => PorosityCare {
            routine: "Maintain balance. You don't need extreme measures, just consistent moisture and gentle cleansing. ",
            ingredients_to_love: &["Coconut Oil", "Honey", "Almond Oil"],
            ingredients_to_avoid: &[],
        },
    }
}

fn curl_care(hair_type: HairType) -> CurlCare {
    match hair_type {
        HairType::Type4 => CurlCare {
            routine_suffix: Some(
                "Detangle gently with fingers or a wide-tooth comb only when wet and conditioned.",
            ),
            styling_tip: "Protective styling is your best friend. Keep ends tucked away to retain length.",
            extra_ingredient_to_avoid: None,
        },
        HairType::Type3 => CurlCare {
            routine_suffix: None,
            styling_tip: "Use the 'rake and shake' method or shingling to define curls. Avoid touching while drying to prevent frizz.",
            extra_ingredient_to_avoid: None,
        },
        HairType::Type2 => CurlCare {
            routine_suffix: None,
            styling_tip: "Scrunch products in upwards. Use a diffuser for volume.",
            extra_ingredient_to_avoid: Some("Heavy Oils (will weigh down waves)"),
        },
        HairType::Type1 => CurlCare {
            routine_suffix: None,
            styling_tip: "Keep it simple. Focus on scalp health and volume.",
            extra_ingredient_to_avoid: None,
        },
    }
}

fn parse_answer<T: FromStr>(answers: &AnswerSet, id: QuestionId) -> Result<T, DiagnosticError> {
    let value = answers
        .get(id)
        .ok_or_else(|| DiagnosticError::IncompleteAnswerSet { missing: vec![id] })?;

    value.parse::<T>().map_err(|_| DiagnosticError::InvalidValue {
        question: id,
        value: value.to_string(),
    })
}

/// Derives the care bundle from a complete answer set. Pure and deterministic.
///
/// Porosity picks the routine opening and ingredient lists, then hair type appends
/// to the routine, sets the styling tip and may add one ingredient to avoid.
pub fn classify(answers: &AnswerSet) -> Result<DiagnosticResult, DiagnosticError> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(DiagnosticError::IncompleteAnswerSet { missing });
    }

    let hair_type: HairType = parse_answer(answers, QuestionId::CurlPattern)?;
    let porosity: Porosity = parse_answer(answers, QuestionId::Porosity)?;
    let density: Density = parse_answer(answers, QuestionId::Density)?;
    let texture: Texture = parse_answer(answers, QuestionId::Texture)?;

    let porosity_care = porosity_care(porosity);
    let curl_care = curl_care(hair_type);

    let mut routine = porosity_care.routine.to_string();
    if let Some(suffix) = curl_care.routine_suffix {
        routine.push_str(suffix);
    }

    let ingredients_to_love = porosity_care
        .ingredients_to_love
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut ingredients_to_avoid: Vec<String> = porosity_care
        .ingredients_to_avoid
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(extra) = curl_care.extra_ingredient_to_avoid {
        ingredients_to_avoid.push(extra.to_string());
    }

    debug!(%hair_type, %porosity, %density, %texture, "classified hair diagnostic");

    Ok(DiagnosticResult {
        hair_type,
        porosity,
        density,
        texture,
        recommendations: Recommendations {
            routine,
            ingredients_to_love,
            ingredients_to_avoid,
            styling_tip: curl_care.styling_tip.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(curl: &str, porosity: &str, density: &str, texture: &str) -> AnswerSet {
        [
            (QuestionId::CurlPattern, curl),
            (QuestionId::Porosity, porosity),
            (QuestionId::Density, density),
            (QuestionId::Texture, texture),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_type4_high_porosity() {
        let result = classify(&answers("Type 4", "High", "High", "Coarse")).unwrap();

        assert_eq!(result.hair_type, HairType::Type4);
        assert_eq!(
            result.recommendations.routine,
            "Focus on protein treatments to fill gaps in the cuticle. Seal moisture with heavier oils/butters (LCO Method). Detangle gently with fingers or a wide-tooth comb only when wet and conditioned."
        );
        assert_eq!(
            result.recommendations.ingredients_to_love,
            vec!["Shea Butter", "Castor Oil", "Hydrolyzed Protein", "Aloe Vera"]
        );
        assert_eq!(
            result.recommendations.ingredients_to_avoid,
            vec!["High pH Shampoos"]
        );
        assert_eq!(
            result.recommendations.styling_tip,
            "Protective styling is your best friend. Keep ends tucked away to retain length."
        );
    }

    #[test]
    fn test_type2_low_porosity_appends_heavy_oils_last() {
        let result = classify(&answers("Type 2", "Low", "Low", "Fine")).unwrap();

        assert_eq!(
            result.recommendations.ingredients_to_avoid,
            vec![
                "Heavy Butters (Shea)",
                "Too much Protein",
                "Heavy Oils (will weigh down waves)"
            ]
        );
        assert_eq!(
            result.recommendations.ingredients_to_love,
            vec![
                "Argan Oil",
                "Grapeseed Oil",
                "Jojoba Oil",
                "Humectants (Glycerin)"
            ]
        );
        assert_eq!(
            result.recommendations.styling_tip,
            "Scrunch products in upwards. Use a diffuser for volume."
        );
    }

    #[test]
    fn test_type1_medium_porosity_keeps_trailing_space() {
        let result = classify(&answers("Type 1", "Medium", "Medium", "Medium")).unwrap();

        assert_eq!(
            result.recommendations.routine,
            "Maintain balance. You don't need extreme measures, just consistent moisture and gentle cleansing. "
        );
        assert!(result.recommendations.ingredients_to_avoid.is_empty());
        assert_eq!(
            result.recommendations.styling_tip,
            "Keep it simple. Focus on scalp health and volume."
        );
    }

    #[test]
    fn test_type3_only_changes_styling_tip() {
        let result = classify(&answers("Type 3", "Low", "High", "Medium")).unwrap();

        assert_eq!(
            result.recommendations.routine,
            "Use heat when deep conditioning to open cuticles. Apply products to soaking wet hair. "
        );
        assert_eq!(
            result.recommendations.styling_tip,
            "Use the 'rake and shake' method or shingling to define curls. Avoid touching while drying to prevent frizz."
        );
    }

    #[test]
    fn test_missing_texture_is_incomplete() {
        let set: AnswerSet = [
            (QuestionId::CurlPattern, "Type 4"),
            (QuestionId::Porosity, "High"),
            (QuestionId::Density, "High"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            classify(&set),
            Err(DiagnosticError::IncompleteAnswerSet {
                missing: vec![QuestionId::Texture]
            })
        );
    }

    #[test]
    fn test_empty_answer_set_reports_every_question() {
        let err = classify(&AnswerSet::new()).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::IncompleteAnswerSet {
                missing: QuestionId::ALL.to_vec()
            }
        );
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = classify(&answers("Type 5", "High", "High", "Coarse")).unwrap_err();
        assert_eq!(
            err,
            DiagnosticError::InvalidValue {
                question: QuestionId::CurlPattern,
                value: "Type 5".to_string()
            }
        );
    }

    #[test]
    fn test_density_and_texture_do_not_change_recommendations() {
        let base = classify(&answers("Type 3", "High", "Low", "Fine")).unwrap();
        for density in ["Low", "Medium", "High"] {
            for texture in ["Fine", "Medium", "Coarse"] {
                let other = classify(&answers("Type 3", "High", density, texture)).unwrap();
                assert_eq!(other.recommendations, base.recommendations);
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let set = answers("Type 2", "High", "Medium", "Coarse");
        assert_eq!(classify(&set).unwrap(), classify(&set).unwrap());
    }
}
