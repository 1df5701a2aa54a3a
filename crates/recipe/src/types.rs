use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Recipe difficulty levels as they appear in the catalog.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// One ingredient line of a recipe: free-text name plus a quantity.
///
/// The unit is a free string ("g", "cup", "piece", ...); the nutrition
/// crate interprets it when converting to grams. An empty unit is treated
/// as a count of whole pieces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Nutrient totals. Depending on context the values are per 100 g
/// (database rows), per serving (catalog recipes), or whole-recipe sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl Nutrition {
    pub const fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
        sugar: f64,
        sodium: f64,
    ) -> Self {
        Nutrition {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            sodium,
        }
    }

    /// Add another nutrient total into this one, field by field.
    pub fn accumulate(&mut self, other: &Nutrition) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
        self.sodium += other.sodium;
    }

    /// Multiply every field by `factor`.
    pub fn scale(&self, factor: f64) -> Nutrition {
        Nutrition {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
        }
    }

    /// Round every field to one decimal place, the precision shown to users.
    pub fn round_to_tenths(&self) -> Nutrition {
        fn tenths(v: f64) -> f64 {
            (v * 10.0).round() / 10.0
        }
        Nutrition {
            calories: tenths(self.calories),
            protein: tenths(self.protein),
            carbs: tenths(self.carbs),
            fat: tenths(self.fat),
            fiber: tenths(self.fiber),
            sugar: tenths(self.sugar),
            sodium: tenths(self.sodium),
        }
    }

    fn has_negative_field(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.sugar,
            self.sodium,
        ]
        .iter()
        .any(|v| *v < 0.0)
    }
}

/// A catalog recipe. Owned by the external catalog loader; the matching,
/// nutrition and personalization crates only ever borrow it and return
/// newly derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    /// Active cooking time in minutes; always positive for a valid recipe.
    pub cooking_time_min: u32,
    #[serde(default)]
    pub prep_time_min: u32,
    /// Number of servings the stored nutrition values describe.
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Dietary tags such as "Vegetarian" or "Gluten-Free".
    #[serde(default)]
    pub dietary: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Per-serving nutrient totals, defaulted by the loader when absent.
    pub nutrition: Nutrition,
    #[serde(default)]
    pub tips: Vec<String>,
    /// Search tags; derivable from the other fields via the matching crate.
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_servings() -> u32 {
    4
}

impl Recipe {
    /// Prep plus cooking time.
    pub fn total_time_min(&self) -> u32 {
        self.prep_time_min + self.cooking_time_min
    }

    /// Check the loader contract. Recipes handed to the engines must have
    /// an identity, a positive cooking time and serving count, and sane
    /// nutrition values. An empty ingredient list is allowed; it scores
    /// 0% instead of failing.
    pub fn validate(&self) -> Result<(), crate::RecipeError> {
        use crate::RecipeError;

        if self.id.trim().is_empty() {
            return Err(RecipeError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(RecipeError::MissingName(self.id.clone()));
        }
        if self.cooking_time_min == 0 {
            return Err(RecipeError::InvalidCookingTime(self.id.clone()));
        }
        if self.servings == 0 {
            return Err(RecipeError::InvalidServings(self.id.clone()));
        }
        if self.nutrition.has_negative_field() {
            return Err(RecipeError::NegativeNutrition(self.id.clone()));
        }
        Ok(())
    }
}
