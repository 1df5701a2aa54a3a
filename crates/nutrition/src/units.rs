use crate::database::default_serving_grams;

/// Convert an ingredient quantity to grams.
///
/// Weight units use exact factors. Volume units use fixed,
/// density-agnostic approximations (1 cup = 240 g, 1 tbsp = 15 g,
/// 1 tsp = 5 g, 1 ml = 1 g). Count units fall back to the ingredient's
/// default serving weight, with "large" at 1.5× and "small" at 0.7× of
/// it. A clove weighs 3 g for garlic, 5 g otherwise. Unknown or empty
/// units degrade to the default serving weight rather than failing.
pub fn convert_to_grams(amount: f64, unit: &str, canonical_name: &str) -> f64 {
    let unit = unit.trim().to_lowercase();
    let unit = if unit.is_empty() { "piece" } else { unit.as_str() };

    let factor = match unit {
        // Weight
        "g" | "gram" | "grams" => 1.0,
        "kg" | "kilogram" | "kilograms" => 1000.0,
        "lb" | "lbs" | "pound" | "pounds" => 453.592,
        "oz" | "ounce" | "ounces" => 28.3495,

        // Volume, approximate
        "ml" | "milliliter" | "milliliters" => 1.0,
        "l" | "liter" | "liters" => 1000.0,
        "cup" | "cups" => 240.0,
        "tbsp" | "tablespoon" | "tablespoons" => 15.0,
        "tsp" | "teaspoon" | "teaspoons" => 5.0,

        // Count-based
        "piece" | "pieces" | "whole" | "medium" => default_serving_grams(canonical_name),
        "large" => default_serving_grams(canonical_name) * 1.5,
        "small" => default_serving_grams(canonical_name) * 0.7,
        "clove" | "cloves" => {
            if canonical_name == "garlic" {
                3.0
            } else {
                5.0
            }
        }

        _ => default_serving_grams(canonical_name),
    };

    amount * factor
}
