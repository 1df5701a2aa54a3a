use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutritionError {
    /// Scaling from zero servings is a caller contract violation, not a
    /// recoverable condition.
    #[error("original servings must be positive, got {0}")]
    InvalidServings(u32),
}
