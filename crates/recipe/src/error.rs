use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("recipe is missing an id")]
    MissingId,

    #[error("recipe {0} has no name")]
    MissingName(String),

    #[error("recipe {0}: cooking time must be positive")]
    InvalidCookingTime(String),

    #[error("recipe {0}: servings must be positive")]
    InvalidServings(String),

    #[error("recipe {0}: nutrition values must be non-negative")]
    NegativeNutrition(String),
}
