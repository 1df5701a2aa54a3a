pub mod catalog;
pub mod matcher;
pub mod normalize;
pub mod scorer;
pub mod search;
pub mod tables;

pub use catalog::{
    catalog_stats, derive_tags, ingredient_suggestions, match_against_catalog, popular_recipes,
    random_recipes, recipes_by_cuisine, recipes_by_dietary, search_by_name, CatalogMatchOptions,
    CatalogStats, PopularRecipe,
};
pub use matcher::{find_best_match, IngredientMatch, MatchKind};
pub use normalize::{normalize, normalize_all};
pub use scorer::{score_recipe, RecipeScore, ScoredRecipe, SubstitutionPair};
pub use search::search;
pub use tables::{substitutes_for, variations_of};
