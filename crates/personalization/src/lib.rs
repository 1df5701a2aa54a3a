pub mod profile;
pub mod suggest;

pub use profile::{PreferenceProfile, TimeBucket, PREFERRED_RATING};
pub use suggest::{personalize, suggestion_score, SuggestedRecipe, SUGGESTION_LIMIT};
