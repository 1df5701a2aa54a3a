pub mod calculator;
pub mod database;
pub mod error;
pub mod units;

pub use calculator::{
    daily_value_percentage, ingredient_nutrition, nutrition_score, recipe_nutrition,
    recommendations, scale_for_servings, Recommendation, RecommendationKind,
};
pub use database::{canonical_name, default_serving_grams, nutrition_per_100g, DEFAULT_PROFILE};
pub use error::NutritionError;
pub use units::convert_to_grams;
