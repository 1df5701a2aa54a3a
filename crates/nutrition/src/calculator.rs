use recipe::{Ingredient, Nutrition};
use serde::{Deserialize, Serialize};

use crate::database::{canonical_name, nutrition_per_100g, DEFAULT_PROFILE};
use crate::error::NutritionError;
use crate::units::convert_to_grams;

/// Nutrient totals for one ingredient line.
///
/// The name is resolved through the alias map; unknown ingredients get
/// the default profile as-is rather than failing, so whole-recipe sums
/// degrade gracefully. Known ingredients scale their per-100g row by the
/// gram weight of the stated quantity. A zero or non-finite amount is
/// treated as one unit.
pub fn ingredient_nutrition(ingredient: &Ingredient) -> Nutrition {
    let canonical = canonical_name(&ingredient.name);

    let Some(per_100g) = nutrition_per_100g(&canonical) else {
        return DEFAULT_PROFILE;
    };

    let amount = if ingredient.amount.is_finite() && ingredient.amount != 0.0 {
        ingredient.amount
    } else {
        1.0
    };
    let grams = convert_to_grams(amount, &ingredient.unit, &canonical);

    per_100g.scale(grams / 100.0)
}

/// Per-serving nutrient totals for a whole ingredient list.
///
/// Sums every ingredient's contribution, divides by the serving count,
/// and rounds to one decimal place. Zero servings is a caller contract
/// violation.
pub fn recipe_nutrition(
    ingredients: &[Ingredient],
    servings: u32,
) -> Result<Nutrition, NutritionError> {
    if servings == 0 {
        return Err(NutritionError::InvalidServings(0));
    }

    let mut total = Nutrition::default();
    for ingredient in ingredients {
        total.accumulate(&ingredient_nutrition(ingredient));
    }

    Ok(total.scale(1.0 / f64::from(servings)).round_to_tenths())
}

/// Rescale per-serving nutrition values to a different serving count.
///
/// Multiplies every field by `new_servings / original_servings` and
/// rounds to one decimal place. `original_servings == 0` is a contract
/// violation the loader must prevent; it surfaces as an error instead of
/// producing infinities.
pub fn scale_for_servings(
    nutrition: &Nutrition,
    original_servings: u32,
    new_servings: u32,
) -> Result<Nutrition, NutritionError> {
    if original_servings == 0 {
        return Err(NutritionError::InvalidServings(0));
    }

    let multiplier = f64::from(new_servings) / f64::from(original_servings);
    Ok(nutrition.scale(multiplier).round_to_tenths())
}

/// Score a nutrient profile from 0 (poor) to 100 (excellent).
///
/// Starts at a neutral 50 and adjusts: protein adds up to 25, fiber up
/// to 15, low sugar up to 10; high sodium subtracts up to 20 and very
/// high calories up to 15. Clamped to 0..=100.
pub fn nutrition_score(nutrition: &Nutrition) -> u8 {
    let mut score = 50.0;

    score += (nutrition.protein / 25.0).min(1.0) * 25.0;
    score += (nutrition.fiber / 10.0).min(1.0) * 15.0;

    if nutrition.sugar < 15.0 {
        score += (15.0 - nutrition.sugar) / 15.0 * 10.0;
    }

    if nutrition.sodium > 800.0 {
        score -= ((nutrition.sodium - 800.0) / 1200.0 * 20.0).min(20.0);
    }

    if nutrition.calories > 600.0 {
        score -= ((nutrition.calories - 600.0) / 400.0 * 15.0).min(15.0);
    }

    score.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationKind {
    Info,
    Warning,
    Positive,
    Suggestion,
}

/// A short nutritional note for display next to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: &str) -> Self {
        Recommendation {
            kind,
            message: message.to_string(),
        }
    }
}

/// Derive per-serving advice from whole-recipe nutrient totals. A zero
/// serving count is treated as one.
pub fn recommendations(nutrition: &Nutrition, servings: u32) -> Vec<Recommendation> {
    let servings = servings.max(1);
    let per_serving = nutrition.scale(1.0 / f64::from(servings)).round_to_tenths();
    let mut notes = Vec::new();

    if per_serving.calories < 200.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Info,
            "Light meal - consider adding sides",
        ));
    } else if per_serving.calories > 700.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Warning,
            "High calorie meal - great for active days",
        ));
    }

    if per_serving.protein > 30.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Positive,
            "Excellent protein content!",
        ));
    } else if per_serving.protein < 15.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Suggestion,
            "Consider adding protein sources",
        ));
    }

    if per_serving.fiber > 8.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Positive,
            "High fiber - great for digestion",
        ));
    }

    if per_serving.sodium > 1200.0 {
        notes.push(Recommendation::new(
            RecommendationKind::Warning,
            "High sodium - consider reducing salt",
        ));
    }

    notes
}

/// Reference daily intake used for percentage displays.
const DAILY_VALUES: [(&str, f64); 6] = [
    ("calories", 2000.0),
    ("protein", 50.0),
    ("carbs", 300.0),
    ("fat", 65.0),
    ("fiber", 25.0),
    ("sodium", 2300.0),
];

/// Percentage of the daily reference value a nutrient amount covers.
/// Unknown nutrients (or non-positive values) report 0.
pub fn daily_value_percentage(value: f64, nutrient: &str) -> u32 {
    let Some((_, daily)) = DAILY_VALUES.iter().find(|(name, _)| *name == nutrient) else {
        return 0;
    };
    if value <= 0.0 {
        return 0;
    }
    ((value / daily) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ingredient_scaled_from_per_100g() {
        // 200 g of rice: per-100g row times two.
        let ing = Ingredient::new("rice", 200.0, "g");
        let n = ingredient_nutrition(&ing);
        assert_eq!(n.calories, 260.0);
        assert_eq!(n.carbs, 56.0);
    }

    #[test]
    fn test_alias_resolved_before_lookup() {
        let breast = Ingredient::new("chicken breast", 100.0, "g");
        let plain = Ingredient::new("chicken", 100.0, "g");
        assert_eq!(ingredient_nutrition(&breast), ingredient_nutrition(&plain));
    }

    #[test]
    fn test_unknown_ingredient_gets_default_profile() {
        let ing = Ingredient::new("unicorn dust", 500.0, "g");
        let n = ingredient_nutrition(&ing);
        // Default profile is returned as-is, not scaled by amount.
        assert_eq!(n.calories, 50.0);
        assert_eq!(n.protein, 2.0);
    }

    #[test]
    fn test_zero_amount_treated_as_one() {
        let zero = Ingredient::new("eggs", 0.0, "piece");
        let one = Ingredient::new("eggs", 1.0, "piece");
        assert_eq!(ingredient_nutrition(&zero), ingredient_nutrition(&one));
    }

    #[test]
    fn test_recipe_nutrition_sums_and_divides() {
        let ingredients = vec![
            Ingredient::new("rice", 200.0, "g"),
            Ingredient::new("chicken", 100.0, "g"),
        ];
        let n = recipe_nutrition(&ingredients, 2).unwrap();
        // (260 + 165) / 2 = 212.5 calories per serving.
        assert_eq!(n.calories, 212.5);
    }

    #[test]
    fn test_recipe_nutrition_zero_servings_errors() {
        assert!(matches!(
            recipe_nutrition(&[], 0),
            Err(NutritionError::InvalidServings(0))
        ));
    }

    #[test]
    fn test_scale_for_servings_doubles() {
        let n = Nutrition::new(400.0, 20.0, 45.5, 12.0, 4.0, 6.0, 350.0);
        let scaled = scale_for_servings(&n, 4, 8).unwrap();
        assert_eq!(scaled.calories, 800.0);
        assert_eq!(scaled.protein, 40.0);
        assert_eq!(scaled.carbs, 91.0);
        assert_eq!(scaled.sodium, 700.0);
    }

    #[test]
    fn test_scale_for_servings_rounds_to_tenths() {
        let n = Nutrition::new(100.0, 10.0, 10.0, 10.0, 1.0, 1.0, 100.0);
        let scaled = scale_for_servings(&n, 3, 1).unwrap();
        assert_eq!(scaled.calories, 33.3);
        assert_eq!(scaled.fiber, 0.3);
    }

    #[test]
    fn test_scale_for_servings_zero_original_is_error() {
        let n = Nutrition::default();
        assert!(scale_for_servings(&n, 0, 4).is_err());
    }

    #[test]
    fn test_nutrition_score_neutral_baseline() {
        // All-zero profile: 50 baseline + 10 low-sugar bonus.
        assert_eq!(nutrition_score(&Nutrition::default()), 60);
    }

    #[test]
    fn test_nutrition_score_rewards_protein_and_fiber() {
        let n = Nutrition::new(400.0, 30.0, 40.0, 10.0, 12.0, 14.9, 200.0);
        // 50 + 25 (protein capped) + 15 (fiber capped) + ~0.07 (sugar).
        assert_eq!(nutrition_score(&n), 90);
    }

    #[test]
    fn test_nutrition_score_penalizes_sodium_and_calories() {
        let n = Nutrition::new(1000.0, 0.0, 0.0, 0.0, 0.0, 20.0, 2000.0);
        // 50 - 20 (sodium) - 15 (calories), no sugar bonus.
        assert_eq!(nutrition_score(&n), 15);
    }

    #[test]
    fn test_nutrition_score_clamped() {
        let n = Nutrition::new(5000.0, 0.0, 0.0, 0.0, 0.0, 100.0, 50000.0);
        assert_eq!(nutrition_score(&n), 15, "penalties cap at 20 and 15");
    }

    #[test]
    fn test_recommendations_light_low_protein() {
        let n = Nutrition::new(150.0, 5.0, 20.0, 2.0, 1.0, 3.0, 100.0);
        let notes = recommendations(&n, 1);
        assert!(notes
            .iter()
            .any(|r| r.kind == RecommendationKind::Info && r.message.contains("Light meal")));
        assert!(notes
            .iter()
            .any(|r| r.kind == RecommendationKind::Suggestion));
    }

    #[test]
    fn test_recommendations_high_protein_fiber() {
        let n = Nutrition::new(500.0, 35.0, 40.0, 15.0, 9.0, 5.0, 300.0);
        let notes = recommendations(&n, 1);
        assert_eq!(
            notes
                .iter()
                .filter(|r| r.kind == RecommendationKind::Positive)
                .count(),
            2
        );
    }

    #[test]
    fn test_daily_value_percentage() {
        assert_eq!(daily_value_percentage(500.0, "calories"), 25);
        assert_eq!(daily_value_percentage(25.0, "protein"), 50);
        assert_eq!(daily_value_percentage(10.0, "unknown"), 0);
        assert_eq!(daily_value_percentage(0.0, "calories"), 0);
    }
}
