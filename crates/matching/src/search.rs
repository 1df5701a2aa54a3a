use recipe::{Recipe, RecipeFilters};
use tracing::debug;

use crate::normalize::normalize_all;
use crate::scorer::{score_recipe, ScoredRecipe};

/// Recipes scoring below this are dropped from ingredient searches.
const MIN_MATCH_PERCENTAGE: u8 = 10;

/// Match the user's ingredients against the whole catalog and rank the
/// results.
///
/// With no ingredients the catalog is returned unscored, filtered only
/// by the preference filters. Otherwise the user list is normalized
/// once, every recipe is scored, weak matches (below 10%) are dropped,
/// preference filters are applied, and the survivors are sorted by:
/// 1. match percentage, descending
/// 2. missing ingredient count, ascending
/// 3. relevance score, descending
///
/// The sort is stable, so fully tied recipes keep their catalog order.
/// The catalog itself is never mutated; every result owns its own data.
pub fn search(
    user_ingredients: &[String],
    catalog: &[Recipe],
    filters: &RecipeFilters,
) -> Vec<ScoredRecipe> {
    if user_ingredients.is_empty() {
        let results: Vec<ScoredRecipe> = catalog
            .iter()
            .filter(|recipe| filters.matches(recipe))
            .map(ScoredRecipe::unscored)
            .collect();
        debug!(
            total = catalog.len(),
            returned = results.len(),
            "ingredient-less search, preference filters only"
        );
        return results;
    }

    let normalized = normalize_all(user_ingredients);

    let mut results: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| ScoredRecipe::from_score(recipe, score_recipe(recipe, &normalized)))
        .filter(|scored| scored.match_percentage >= MIN_MATCH_PERCENTAGE)
        .filter(|scored| filters.matches(&scored.recipe))
        .collect();

    results.sort_by(|a, b| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then_with(|| {
                a.missing_ingredients
                    .len()
                    .cmp(&b.missing_ingredients.len())
            })
            .then_with(|| b.score.total_cmp(&a.score))
    });

    debug!(
        ingredients = user_ingredients.len(),
        total = catalog.len(),
        returned = results.len(),
        "ingredient search complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe::{Difficulty, Ingredient, Nutrition};

    fn create_test_recipe(id: &str, difficulty: Difficulty, ingredient_names: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Test Recipe {}", id),
            description: String::new(),
            cuisine: "Italian".to_string(),
            difficulty,
            cooking_time_min: 30,
            prep_time_min: 10,
            servings: 4,
            dietary: Vec::new(),
            ingredients: ingredient_names
                .iter()
                .map(|n| Ingredient::new(*n, 1.0, "piece"))
                .collect(),
            nutrition: Nutrition::default(),
            tips: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_ingredients_returns_filtered_unscored() {
        let catalog = vec![
            create_test_recipe("easy", Difficulty::Easy, &["egg"]),
            create_test_recipe("hard", Difficulty::Hard, &["egg"]),
        ];
        let filters = RecipeFilters {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        let results = search(&[], &catalog, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, "easy");
        assert_eq!(results[0].match_percentage, 0, "unscored");
    }

    #[test]
    fn test_threshold_drops_weak_matches() {
        let catalog = vec![
            create_test_recipe("good", Difficulty::Easy, &["chicken", "rice"]),
            create_test_recipe(
                "weak",
                Difficulty::Easy,
                &[
                    "anchovy", "caper", "olive", "gherkin", "quail", "venison", "rhubarb",
                    "durian", "natto", "haggi", "escargot", "tripe",
                ],
            ),
        ];
        let results = search(&owned(&["chicken", "rice"]), &catalog, &RecipeFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].recipe.id, "good");
    }

    #[test]
    fn test_sorted_by_percentage_then_missing() {
        let catalog = vec![
            create_test_recipe("half", Difficulty::Easy, &["chicken", "durian"]),
            create_test_recipe("full", Difficulty::Easy, &["chicken"]),
        ];
        let results = search(&owned(&["chicken"]), &catalog, &RecipeFilters::default());
        assert_eq!(results[0].recipe.id, "full");
        assert_eq!(results[0].match_percentage, 100);
        assert_eq!(results[1].recipe.id, "half");
    }

    #[test]
    fn test_normalization_applied_once_to_user_input() {
        let catalog = vec![create_test_recipe("r", Difficulty::Easy, &["onion"])];
        let results = search(&owned(&["  Onions "]), &catalog, &RecipeFilters::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percentage, 100);
    }

    #[test]
    fn test_results_do_not_mutate_catalog() {
        let catalog = vec![create_test_recipe("r", Difficulty::Easy, &["onion"])];
        let before = catalog[0].clone();
        let _ = search(&owned(&["onion"]), &catalog, &RecipeFilters::default());
        assert_eq!(catalog[0].id, before.id);
        assert_eq!(catalog[0].ingredients.len(), before.ingredients.len());
    }
}
