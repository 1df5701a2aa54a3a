use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, Recipe};

/// User preference filters applied after scoring. Every field is
/// optional; `None` (or an empty string) means the constraint is off,
/// so a default `RecipeFilters` passes everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeFilters {
    /// Case-insensitive substring matched against any of the recipe's
    /// dietary tags ("vegetarian" matches "Vegetarian", "Ovo-Vegetarian").
    pub dietary: Option<String>,
    /// Exact difficulty match.
    pub difficulty: Option<Difficulty>,
    /// Exact cuisine match.
    pub cuisine: Option<String>,
    /// Inclusive upper bound on active cooking time in minutes.
    pub max_cooking_time: Option<u32>,
    /// Inclusive upper bound on per-serving calories.
    pub max_calories: Option<f64>,
    /// Inclusive lower bound on per-serving protein grams.
    pub min_protein: Option<f64>,
}

impl RecipeFilters {
    /// True when every set constraint accepts the recipe.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(dietary) = non_empty(&self.dietary) {
            let wanted = dietary.to_lowercase();
            let found = recipe
                .dietary
                .iter()
                .any(|tag| tag.to_lowercase().contains(&wanted));
            if !found {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }

        if let Some(cuisine) = non_empty(&self.cuisine) {
            if recipe.cuisine != *cuisine {
                return false;
            }
        }

        if let Some(max_time) = self.max_cooking_time {
            if recipe.cooking_time_min > max_time {
                return false;
            }
        }

        if let Some(max_calories) = self.max_calories {
            if recipe.nutrition.calories > max_calories {
                return false;
            }
        }

        if let Some(min_protein) = self.min_protein {
            if recipe.nutrition.protein < min_protein {
                return false;
            }
        }

        true
    }
}

/// Empty strings mean "no constraint", same as `None`.
fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.trim().is_empty())
}
