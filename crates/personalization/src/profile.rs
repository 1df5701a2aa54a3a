use std::collections::HashMap;

use matching::normalize;
use recipe::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};

/// Ratings at or above this mark a recipe as preferred.
pub const PREFERRED_RATING: u8 = 4;

/// Coarse cooking-time buckets used for preference counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    /// 20 minutes or less.
    Fast,
    /// 21 to 45 minutes.
    Medium,
    /// More than 45 minutes.
    Slow,
}

impl TimeBucket {
    pub fn for_cooking_time(minutes: u32) -> Self {
        if minutes <= 20 {
            TimeBucket::Fast
        } else if minutes <= 45 {
            TimeBucket::Medium
        } else {
            TimeBucket::Slow
        }
    }
}

/// Aggregate taste signals counted across a user's preferred recipes
/// (highly rated or favorited). Each table maps a trait to how many
/// preferred recipes carry it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceProfile {
    pub cuisines: HashMap<String, u32>,
    pub difficulties: HashMap<Difficulty, u32>,
    pub time_buckets: HashMap<TimeBucket, u32>,
    /// Keyed by normalized ingredient name.
    pub ingredients: HashMap<String, u32>,
    pub dietary: HashMap<String, u32>,
}

impl PreferenceProfile {
    /// Derive a profile from rating and favorite history. Preferred
    /// recipes are those rated at least [`PREFERRED_RATING`] or present
    /// in the favorites list.
    pub fn analyze(
        catalog: &[Recipe],
        ratings: &HashMap<String, u8>,
        favorites: &[String],
    ) -> Self {
        let mut profile = PreferenceProfile::default();

        let preferred = catalog.iter().filter(|recipe| {
            ratings
                .get(&recipe.id)
                .is_some_and(|r| *r >= PREFERRED_RATING)
                || favorites.contains(&recipe.id)
        });

        for recipe in preferred {
            *profile.cuisines.entry(recipe.cuisine.clone()).or_default() += 1;
            *profile.difficulties.entry(recipe.difficulty).or_default() += 1;
            *profile
                .time_buckets
                .entry(TimeBucket::for_cooking_time(recipe.cooking_time_min))
                .or_default() += 1;

            for ingredient in &recipe.ingredients {
                *profile
                    .ingredients
                    .entry(normalize(&ingredient.name))
                    .or_default() += 1;
            }

            for diet in &recipe.dietary {
                *profile.dietary.entry(diet.clone()).or_default() += 1;
            }
        }

        profile
    }

    pub fn is_empty(&self) -> bool {
        self.cuisines.is_empty()
            && self.difficulties.is_empty()
            && self.time_buckets.is_empty()
            && self.ingredients.is_empty()
            && self.dietary.is_empty()
    }

    fn count<K: std::hash::Hash + Eq>(table: &HashMap<K, u32>, key: &K) -> u32 {
        table.get(key).copied().unwrap_or(0)
    }

    pub fn cuisine_count(&self, cuisine: &str) -> u32 {
        self.cuisines.get(cuisine).copied().unwrap_or(0)
    }

    pub fn difficulty_count(&self, difficulty: Difficulty) -> u32 {
        Self::count(&self.difficulties, &difficulty)
    }

    pub fn time_bucket_count(&self, bucket: TimeBucket) -> u32 {
        Self::count(&self.time_buckets, &bucket)
    }

    pub fn ingredient_count(&self, normalized_name: &str) -> u32 {
        self.ingredients.get(normalized_name).copied().unwrap_or(0)
    }

    pub fn dietary_count(&self, tag: &str) -> u32 {
        self.dietary.get(tag).copied().unwrap_or(0)
    }
}
