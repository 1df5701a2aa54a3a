use std::collections::HashMap;

use matching::{normalize, normalize_all, score_recipe};
use recipe::Recipe;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::{PreferenceProfile, TimeBucket};

/// Number of suggestions returned by [`personalize`].
pub const SUGGESTION_LIMIT: usize = 12;

/// Per-occurrence weights for each preference table. Dietary alignment
/// weighs almost as much as cuisine; ingredient overlap is counted per
/// recipe ingredient, so it accumulates for ingredient-heavy favorites.
const CUISINE_WEIGHT: f64 = 15.0;
const DIFFICULTY_WEIGHT: f64 = 8.0;
const TIME_BUCKET_WEIGHT: f64 = 5.0;
const INGREDIENT_WEIGHT: f64 = 3.0;
const DIETARY_WEIGHT: f64 = 12.0;

/// Weight applied to the ingredient-match percentage when the caller
/// supplies the user's currently available ingredients.
const AVAILABILITY_WEIGHT: f64 = 0.4;

/// A recipe suggested from taste history, with its ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedRecipe {
    pub recipe: Recipe,
    pub suggestion_score: f64,
}

/// Suggest recipes from rating/favorite history.
///
/// Derives a [`PreferenceProfile`] from the user's preferred recipes,
/// scores every recipe the user has not already favorited against it,
/// and returns the top [`SUGGESTION_LIMIT`] with positive scores. When
/// `available_ingredients` is non-empty, each candidate also earns 0.4×
/// its ingredient match percentage, nudging cookable recipes upward.
pub fn personalize(
    catalog: &[Recipe],
    ratings: &HashMap<String, u8>,
    favorites: &[String],
    available_ingredients: &[String],
) -> Vec<SuggestedRecipe> {
    let profile = PreferenceProfile::analyze(catalog, ratings, favorites);
    let normalized_available = normalize_all(available_ingredients);

    let mut suggestions: Vec<SuggestedRecipe> = catalog
        .iter()
        .filter(|recipe| !favorites.contains(&recipe.id))
        .map(|recipe| SuggestedRecipe {
            recipe: recipe.clone(),
            suggestion_score: suggestion_score(recipe, &profile, &normalized_available),
        })
        .filter(|s| s.suggestion_score > 0.0)
        .collect();

    suggestions.sort_by(|a, b| b.suggestion_score.total_cmp(&a.suggestion_score));
    suggestions.truncate(SUGGESTION_LIMIT);

    debug!(
        preferred_tables = !profile.is_empty(),
        returned = suggestions.len(),
        "personalized suggestions computed"
    );

    suggestions
}

/// Score one candidate against the preference profile. Rounded to a
/// whole number like the percentages it combines with.
pub fn suggestion_score(
    recipe: &Recipe,
    profile: &PreferenceProfile,
    normalized_available: &[String],
) -> f64 {
    let mut score = 0.0;

    score += f64::from(profile.cuisine_count(&recipe.cuisine)) * CUISINE_WEIGHT;
    score += f64::from(profile.difficulty_count(recipe.difficulty)) * DIFFICULTY_WEIGHT;
    score += f64::from(profile.time_bucket_count(TimeBucket::for_cooking_time(
        recipe.cooking_time_min,
    ))) * TIME_BUCKET_WEIGHT;

    for ingredient in &recipe.ingredients {
        score += f64::from(profile.ingredient_count(&normalize(&ingredient.name)))
            * INGREDIENT_WEIGHT;
    }

    for diet in &recipe.dietary {
        score += f64::from(profile.dietary_count(diet)) * DIETARY_WEIGHT;
    }

    if !normalized_available.is_empty() {
        let match_result = score_recipe(recipe, normalized_available);
        score += f64::from(match_result.percentage) * AVAILABILITY_WEIGHT;
    }

    score.round()
}
