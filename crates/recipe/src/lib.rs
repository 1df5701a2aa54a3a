pub mod error;
pub mod filters;
pub mod types;

pub use error::RecipeError;
pub use filters::RecipeFilters;
pub use types::{Difficulty, Ingredient, Nutrition, Recipe};
