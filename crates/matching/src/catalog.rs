//! Catalog-level matching and lookup helpers.
//!
//! `match_against_catalog` is a second, simpler scoring path used by
//! catalog lookups (minimum-match filtering, standalone search). It
//! shares the matcher but carries its own weight set and tie-break, and
//! is kept separate from `search::search` so tuning one path never
//! silently changes the other.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use recipe::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};

use crate::matcher::{find_best_match, MatchKind};
use crate::normalize::{normalize, normalize_all};
use crate::scorer::{ScoredRecipe, SubstitutionPair};

/// Catalog-path match weights; tuned independently of the scorer's.
const EXACT_WEIGHT: f64 = 1.0;
const PARTIAL_WEIGHT: f64 = 0.7;
const SUBSTITUTION_WEIGHT: f64 = 0.5;

/// Options for [`match_against_catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMatchOptions {
    /// Maximum number of results returned.
    pub limit: usize,
    /// Drop recipes below this match percentage.
    pub min_match_percentage: u8,
}

impl Default for CatalogMatchOptions {
    fn default() -> Self {
        CatalogMatchOptions {
            limit: 50,
            min_match_percentage: 0,
        }
    }
}

/// Match the user's ingredients directly against the catalog.
///
/// Weights exact 1.0 / partial 0.7 / substitution 0.5, no relevance
/// bonuses, ties broken only on missing-ingredient count. An empty
/// ingredient list returns the first `limit` recipes unscored.
pub fn match_against_catalog(
    user_ingredients: &[String],
    catalog: &[Recipe],
    options: &CatalogMatchOptions,
) -> Vec<ScoredRecipe> {
    if user_ingredients.is_empty() {
        return catalog
            .iter()
            .take(options.limit)
            .map(ScoredRecipe::unscored)
            .collect();
    }

    let normalized = normalize_all(user_ingredients);

    let mut results: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| score_against_catalog(recipe, &normalized))
        .filter(|scored| scored.match_percentage >= options.min_match_percentage)
        .collect();

    results.sort_by(|a, b| {
        b.match_percentage.cmp(&a.match_percentage).then_with(|| {
            a.missing_ingredients
                .len()
                .cmp(&b.missing_ingredients.len())
        })
    });
    results.truncate(options.limit);
    results
}

fn score_against_catalog(recipe: &Recipe, user_ingredients: &[String]) -> ScoredRecipe {
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

    let total = recipe_ingredients.len();
    let weighted = exact_matches as f64 * EXACT_WEIGHT
        + partial_matches as f64 * PARTIAL_WEIGHT
        + substitution_matches as f64 * SUBSTITUTION_WEIGHT;
    let percentage = if total == 0 {
        0
    } else {
        ((weighted / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
    };

    ScoredRecipe {
        recipe: recipe.clone(),
        match_percentage: percentage,
        matched_ingredients: matched,
        missing_ingredients: missing,
        substitutable_ingredients: substitutable,
        score: weighted,
    }
}

/// Case-insensitive name/description/cuisine/tag search. Queries shorter
/// than two characters return nothing.
pub fn search_by_name<'a>(catalog: &'a [Recipe], query: &str, limit: usize) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < 2 {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|recipe| {
            recipe.name.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query)
                || recipe.cuisine.to_lowercase().contains(&query)
                || recipe.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .take(limit)
        .collect()
}

/// Recipes of one cuisine, compared case-insensitively.
pub fn recipes_by_cuisine<'a>(catalog: &'a [Recipe], cuisine: &str, limit: usize) -> Vec<&'a Recipe> {
    let wanted = cuisine.to_lowercase();
    catalog
        .iter()
        .filter(|recipe| recipe.cuisine.to_lowercase() == wanted)
        .take(limit)
        .collect()
}

/// Recipes carrying a dietary tag containing `dietary`, case-insensitive.
pub fn recipes_by_dietary<'a>(catalog: &'a [Recipe], dietary: &str, limit: usize) -> Vec<&'a Recipe> {
    let wanted = dietary.to_lowercase();
    catalog
        .iter()
        .filter(|recipe| {
            recipe
                .dietary
                .iter()
                .any(|tag| tag.to_lowercase().contains(&wanted))
        })
        .take(limit)
        .collect()
}

/// A recipe paired with its popularity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularRecipe {
    pub recipe: Recipe,
    pub popularity_score: f64,
}

/// Rank the catalog by a popularity heuristic: quick and easy recipes,
/// dietary coverage, and balanced nutrition all add points, plus a
/// jitter of up to 20 points for variety. The jitter source is seedable
/// so tests and cache-keyed callers get deterministic orderings; `None`
/// falls back to a timestamp-derived seed.
pub fn popular_recipes(catalog: &[Recipe], limit: usize, seed: Option<u64>) -> Vec<PopularRecipe> {
    let mut rng = rng_from_seed(seed);

    let mut scored: Vec<PopularRecipe> = catalog
        .iter()
        .map(|recipe| PopularRecipe {
            recipe: recipe.clone(),
            popularity_score: popularity_score(recipe, &mut rng),
        })
        .collect();

    scored.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));
    scored.truncate(limit);
    scored
}

fn popularity_score(recipe: &Recipe, rng: &mut StdRng) -> f64 {
    let mut score = 0.0;

    if recipe.cooking_time_min <= 30 {
        score += 20.0;
    } else if recipe.cooking_time_min <= 60 {
        score += 10.0;
    }

    match recipe.difficulty {
        Difficulty::Easy => score += 15.0,
        Difficulty::Medium => score += 10.0,
        Difficulty::Hard => {}
    }

    score += recipe.dietary.len() as f64 * 5.0;

    let nutrition = &recipe.nutrition;
    if nutrition.protein > 20.0 {
        score += 5.0;
    }
    if nutrition.calories < 500.0 {
        score += 5.0;
    }
    if nutrition.fiber > 5.0 {
        score += 3.0;
    }

    // Jitter for variety.
    score += rng.random::<f64>() * 20.0;

    score.round()
}

/// A seeded shuffle of the catalog for discovery surfaces.
pub fn random_recipes(catalog: &[Recipe], count: usize, seed: Option<u64>) -> Vec<Recipe> {
    let mut rng = rng_from_seed(seed);
    let mut shuffled: Vec<Recipe> = catalog.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled.truncate(count);
    shuffled
}

/// Sorted, de-duplicated normalized ingredient names across the catalog,
/// optionally narrowed by a partial string, capped at 50 entries.
pub fn ingredient_suggestions(catalog: &[Recipe], partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    let mut names = BTreeSet::new();

    for recipe in catalog {
        for ingredient in &recipe.ingredients {
            let normalized = normalize(&ingredient.name);
            if partial.is_empty() || normalized.contains(&partial) {
                names.insert(normalized);
            }
        }
    }

    names.into_iter().take(50).collect()
}

/// Aggregate catalog statistics for browse/filter UIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub cuisines: Vec<String>,
    pub difficulties: Vec<String>,
    pub dietary: Vec<String>,
    pub avg_cooking_time_min: u32,
    pub avg_calories: f64,
    pub cooking_time_range: (u32, u32),
    pub calories_range: (f64, f64),
}

pub fn catalog_stats(catalog: &[Recipe]) -> CatalogStats {
    if catalog.is_empty() {
        return CatalogStats::default();
    }

    let cuisines: BTreeSet<String> = catalog.iter().map(|r| r.cuisine.clone()).collect();
    let difficulties: BTreeSet<String> =
        catalog.iter().map(|r| r.difficulty.to_string()).collect();
    let dietary: BTreeSet<String> = catalog
        .iter()
        .flat_map(|r| r.dietary.iter().cloned())
        .collect();

    let total = catalog.len();
    let time_sum: u64 = catalog.iter().map(|r| u64::from(r.cooking_time_min)).sum();
    let calorie_sum: f64 = catalog.iter().map(|r| r.nutrition.calories).sum();

    let time_min = catalog.iter().map(|r| r.cooking_time_min).min().unwrap_or(0);
    let time_max = catalog.iter().map(|r| r.cooking_time_min).max().unwrap_or(0);
    let cal_min = catalog
        .iter()
        .map(|r| r.nutrition.calories)
        .fold(f64::INFINITY, f64::min);
    let cal_max = catalog
        .iter()
        .map(|r| r.nutrition.calories)
        .fold(f64::NEG_INFINITY, f64::max);

    CatalogStats {
        total,
        cuisines: cuisines.into_iter().collect(),
        difficulties: difficulties.into_iter().collect(),
        dietary: dietary.into_iter().collect(),
        avg_cooking_time_min: (time_sum as f64 / total as f64).round() as u32,
        avg_calories: (calorie_sum / total as f64).round(),
        cooking_time_range: (time_min, time_max),
        calories_range: (cal_min, cal_max),
    }
}

/// Common-ingredient vocabulary used for tag derivation.
const COMMON_INGREDIENTS: [&str; 7] =
    ["chicken", "beef", "pork", "fish", "vegetable", "pasta", "rice"];

/// Derive search tags from a recipe's cuisine, difficulty, dietary tags,
/// time bucket, and common ingredients. De-duplicated, order preserved.
pub fn derive_tags(recipe: &Recipe) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tags: &mut Vec<String>, tag: String| {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    };

    push(&mut tags, recipe.cuisine.to_lowercase());
    push(&mut tags, recipe.difficulty.to_string().to_lowercase());

    for diet in &recipe.dietary {
        let slug: String = diet
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        push(&mut tags, slug);
    }

    if recipe.cooking_time_min <= 15 {
        push(&mut tags, "quick".to_string());
        push(&mut tags, "fast".to_string());
    } else if recipe.cooking_time_min <= 30 {
        push(&mut tags, "moderate".to_string());
    } else {
        push(&mut tags, "slow".to_string());
    }

    for ingredient in &recipe.ingredients {
        let normalized = normalize(&ingredient.name);
        for common in COMMON_INGREDIENTS {
            if normalized.contains(common) {
                push(&mut tags, common.to_string());
            }
        }
    }

    tags
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            use std::time::SystemTime;
            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            StdRng::seed_from_u64(now)
        }
    }
}
