use recipe::Recipe;
use serde::{Deserialize, Serialize};

use crate::matcher::{find_best_match, MatchKind};
use crate::normalize::normalize;

/// Match-type weights for the interactive search path. The catalog-level
/// matcher in `catalog` uses its own, differently tuned set; the two are
/// deliberately separate entry points.
const EXACT_WEIGHT: f64 = 1.0;
const PARTIAL_WEIGHT: f64 = 0.8;
const SUBSTITUTION_WEIGHT: f64 = 0.6;

/// Pantry staples that earn a small relevance bonus when a recipe uses
/// any of them (compared post-normalization).
const STAPLES: [&str; 4] = ["salt", "pepper", "oil", "water"];

/// A recipe ingredient satisfied by a substitute, paired with the user
/// ingredient standing in for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionPair {
    pub original: String,
    pub substitute: String,
}

/// Outcome of scoring one recipe against the user's ingredient set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Weighted share of recipe ingredients satisfied, 0..=100.
    pub percentage: u8,
    /// Normalized recipe ingredients satisfied exactly, partially, or
    /// by substitution.
    pub matched: Vec<String>,
    /// Normalized recipe ingredients nothing in the user's set covers.
    pub missing: Vec<String>,
    /// Subset of `matched` satisfied only through the substitution table.
    pub substitutable: Vec<SubstitutionPair>,
    /// Percentage plus relevance bonuses; unbounded, used only to rank.
    pub total: f64,
    pub exact_matches: usize,
    pub partial_matches: usize,
    pub substitution_matches: usize,
}

/// A catalog recipe decorated with its match outcome for one search.
/// Recomputed every search; never written back to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub match_percentage: u8,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub substitutable_ingredients: Vec<SubstitutionPair>,
    /// Ranking-only relevance value; not meaningful for display.
    pub score: f64,
}

impl ScoredRecipe {
    /// Wrap a recipe that was never scored (empty-ingredient search path).
    pub fn unscored(recipe: &Recipe) -> Self {
        ScoredRecipe {
            recipe: recipe.clone(),
            match_percentage: 0,
            matched_ingredients: Vec::new(),
            missing_ingredients: Vec::new(),
            substitutable_ingredients: Vec::new(),
            score: 0.0,
        }
    }

    pub fn from_score(recipe: &Recipe, score: RecipeScore) -> Self {
        ScoredRecipe {
            recipe: recipe.clone(),
            match_percentage: score.percentage,
            matched_ingredients: score.matched,
            missing_ingredients: score.missing,
            substitutable_ingredients: score.substitutable,
            score: score.total,
        }
    }
}

/// Score one recipe against an already-normalized user ingredient set.
///
/// Every recipe ingredient is classified by the matcher and tallied with
/// weights exact 1.0 / partial 0.8 / substitution 0.6. The percentage is
/// the weighted tally over the recipe's ingredient count, rounded and
/// clamped to 0..=100. A recipe with no ingredients scores 0 rather than
/// dividing by zero.
///
/// On top of the percentage, `total` adds ranking bonuses:
/// - up to 15 points for the share of user ingredients the recipe puts
///   to use;
/// - 10 points for a small recipe (≤6 ingredients) when the user listed
///   only a few (≤3);
/// - 5 points when the recipe uses any pantry staple.
pub fn score_recipe(recipe: &Recipe, user_ingredients: &[String]) -> RecipeScore {
    let recipe_ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|ing| normalize(&ing.name))
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut substitutable = Vec::new();
    let mut exact_matches = 0usize;
    let mut partial_matches = 0usize;
    let mut substitution_matches = 0usize;

    for recipe_ing in &recipe_ingredients {
        let m = find_best_match(recipe_ing, user_ingredients);
        match m.kind {
            MatchKind::Exact => {
                matched.push(recipe_ing.clone());
                exact_matches += 1;
            }
            MatchKind::Partial => {
                matched.push(recipe_ing.clone());
                partial_matches += 1;
            }
            MatchKind::Substitute => {
                matched.push(recipe_ing.clone());
                substitutable.push(SubstitutionPair {
                    original: recipe_ing.clone(),
                    substitute: m.matched_with.unwrap_or_default(),
                });
                substitution_matches += 1;
            }
            MatchKind::None => missing.push(recipe_ing.clone()),
        }
    }

    let total_ingredients = recipe_ingredients.len();
    let weighted = exact_matches as f64 * EXACT_WEIGHT
        + partial_matches as f64 * PARTIAL_WEIGHT
        + substitution_matches as f64 * SUBSTITUTION_WEIGHT;
    let percentage = if total_ingredients == 0 {
        0
    } else {
        ((weighted / total_ingredients as f64) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    };

    let mut total = percentage as f64;

    // Reward recipes that put more of what the user has to use.
    if !user_ingredients.is_empty() {
        let used = user_ingredients
            .iter()
            .filter(|user_ing| {
                recipe_ingredients.iter().any(|recipe_ing| {
                    find_best_match(recipe_ing, std::slice::from_ref(*user_ing)).kind
                        != MatchKind::None
                })
            })
            .count();
        total += (used as f64 / user_ingredients.len() as f64) * 15.0;
    }

    // Simple recipes surface higher when the pantry is nearly empty.
    if user_ingredients.len() <= 3 && total_ingredients <= 6 {
        total += 10.0;
    }

    if recipe_ingredients.iter().any(|ing| STAPLES.contains(&ing.as_str())) {
        total += 5.0;
    }

    RecipeScore {
        percentage,
        matched,
        missing,
        substitutable,
        total,
        exact_matches,
        partial_matches,
        substitution_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_all;
    use recipe::{Difficulty, Ingredient, Nutrition};

    fn create_test_recipe(id: &str, ingredient_names: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: format!("Test Recipe {}", id),
            description: String::new(),
            cuisine: "American".to_string(),
            difficulty: Difficulty::Easy,
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

    fn user(items: &[&str]) -> Vec<String> {
        normalize_all(&items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_all_exact_gives_100_percent() {
        let recipe = create_test_recipe("r1", &["chicken", "rice", "onion"]);
        let score = score_recipe(&recipe, &user(&["chicken", "rice", "onions"]));
        assert_eq!(score.percentage, 100);
        assert_eq!(score.exact_matches, 3);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_zero_ingredient_recipe_scores_zero() {
        let recipe = create_test_recipe("r1", &[]);
        let score = score_recipe(&recipe, &user(&["chicken"]));
        assert_eq!(score.percentage, 0, "no division-by-zero panic");
    }

    #[test]
    fn test_documented_weighting_scenario() {
        // chicken = exact, rice = partial (via "jasmine rice"),
        // onions = missing: round((1.0 + 0.8) / 3 * 100) = 60.
        let recipe = create_test_recipe("r1", &["chicken", "rice", "onions"]);
        let score = score_recipe(&recipe, &user(&["chicken", "jasmine rice"]));
        assert_eq!(score.exact_matches, 1);
        assert_eq!(score.partial_matches, 1);
        assert_eq!(score.missing, vec!["onion".to_string()]);
        assert_eq!(score.percentage, 60);
    }

    #[test]
    fn test_substitution_recorded_with_pair() {
        let recipe = create_test_recipe("r1", &["butter"]);
        let score = score_recipe(&recipe, &user(&["margarine"]));
        assert_eq!(score.substitution_matches, 1);
        assert_eq!(score.percentage, 60);
        assert_eq!(
            score.substitutable,
            vec![SubstitutionPair {
                original: "butter".to_string(),
                substitute: "margarine".to_string(),
            }]
        );
    }

    #[test]
    fn test_usage_bonus_counts_used_user_ingredients() {
        let recipe = create_test_recipe("r1", &["chicken", "rice"]);
        // Only one of two user ingredients is used: +7.5 usage bonus,
        // +10 small-recipe bonus on top of 50%.
        let score = score_recipe(&recipe, &user(&["chicken", "chocolate"]));
        assert_eq!(score.percentage, 50);
        assert!((score.total - (50.0 + 7.5 + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_staples_bonus() {
        let with_staple = create_test_recipe("r1", &["chicken", "salt"]);
        let without = create_test_recipe("r2", &["chicken", "cumin"]);
        let ingredients = user(&["chicken", "salt", "cumin"]);
        let a = score_recipe(&with_staple, &ingredients);
        let b = score_recipe(&without, &ingredients);
        // Identical percentages and usage; only the staple bonus differs.
        assert_eq!(a.percentage, b.percentage);
        assert!((a.total - b.total - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_recipe_bonus_requires_both_conditions() {
        let small = create_test_recipe("r1", &["egg", "flour"]);
        let large = create_test_recipe(
            "r2",
            &["egg", "flour", "milk", "sugar", "vanilla", "baking powder", "salt"],
        );
        let few = user(&["egg"]);
        let small_score = score_recipe(&small, &few);
        let large_score = score_recipe(&large, &few);
        assert!(small_score.total > small_score.percentage as f64 + 10.0 - 1e-9);
        // Seven ingredients: no small-recipe bonus, but staples bonus
        // applies because of salt.
        assert!(large_score.total < large_score.percentage as f64 + 15.0 + 10.0);
    }
}
