//! Static nutrition reference data: per-100g nutrient rows, default
//! serving weights for count-based units, and the name alias map that
//! folds display names onto database keys.
//!
//! The alias map is deliberately separate from the matching crate's
//! normalizer; nutrition lookup only lower-cases and trims, then maps
//! known display names ("chicken breast" → "chicken") onto row keys.

use std::collections::HashMap;
use std::sync::LazyLock;

use recipe::Nutrition;

/// Nutrient profile used for ingredients the database does not know.
/// A mild, low-impact guess so unknown ingredients never fail a recipe.
pub const DEFAULT_PROFILE: Nutrition = Nutrition::new(50.0, 2.0, 8.0, 1.0, 2.0, 3.0, 10.0);

/// Per-100g nutrient rows, keyed by canonical database name.
static NUTRITION_DATABASE: LazyLock<HashMap<&'static str, Nutrition>> = LazyLock::new(|| {
    let mut db = HashMap::new();

    // Proteins
    db.insert("chicken", Nutrition::new(165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0));
    db.insert("beef", Nutrition::new(250.0, 26.0, 0.0, 17.0, 0.0, 0.0, 72.0));
    db.insert("pork", Nutrition::new(242.0, 27.0, 0.0, 14.0, 0.0, 0.0, 62.0));
    db.insert("fish", Nutrition::new(206.0, 22.0, 0.0, 12.0, 0.0, 0.0, 59.0));
    db.insert("salmon", Nutrition::new(208.0, 20.0, 0.0, 13.0, 0.0, 0.0, 59.0));
    db.insert("tuna", Nutrition::new(144.0, 30.0, 0.0, 1.0, 0.0, 0.0, 43.0));
    db.insert("shrimp", Nutrition::new(85.0, 20.0, 0.0, 1.0, 0.0, 0.0, 111.0));
    db.insert("eggs", Nutrition::new(155.0, 13.0, 1.1, 11.0, 0.0, 1.1, 124.0));
    db.insert("tofu", Nutrition::new(76.0, 8.0, 1.9, 4.8, 0.3, 0.6, 7.0));

    // Vegetables
    db.insert("tomatoes", Nutrition::new(18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0));
    db.insert("onions", Nutrition::new(40.0, 1.1, 9.3, 0.1, 1.7, 4.2, 4.0));
    db.insert("garlic", Nutrition::new(149.0, 6.4, 33.0, 0.5, 2.1, 1.0, 17.0));
    db.insert("carrots", Nutrition::new(41.0, 0.9, 9.6, 0.2, 2.8, 4.7, 69.0));
    db.insert("broccoli", Nutrition::new(34.0, 2.8, 6.6, 0.4, 2.6, 1.5, 33.0));
    db.insert("spinach", Nutrition::new(23.0, 2.9, 3.6, 0.4, 2.2, 0.4, 79.0));
    db.insert("bell peppers", Nutrition::new(31.0, 1.0, 7.0, 0.3, 2.5, 4.2, 4.0));
    db.insert("mushrooms", Nutrition::new(22.0, 3.1, 3.3, 0.3, 1.0, 2.0, 5.0));

    // Grains and starches
    db.insert("rice", Nutrition::new(130.0, 2.7, 28.0, 0.3, 0.4, 0.1, 1.0));
    db.insert("pasta", Nutrition::new(131.0, 5.0, 25.0, 1.1, 1.8, 0.6, 1.0));
    db.insert("bread", Nutrition::new(265.0, 9.0, 49.0, 3.2, 2.7, 5.0, 491.0));
    db.insert("potatoes", Nutrition::new(87.0, 2.0, 20.0, 0.1, 1.8, 0.8, 6.0));
    db.insert("quinoa", Nutrition::new(120.0, 4.4, 22.0, 1.9, 2.8, 0.9, 7.0));

    // Dairy
    db.insert("cheese", Nutrition::new(113.0, 25.0, 1.0, 0.2, 0.0, 1.0, 381.0));
    db.insert("milk", Nutrition::new(42.0, 3.4, 5.0, 1.0, 0.0, 5.0, 44.0));
    db.insert("yogurt", Nutrition::new(59.0, 10.0, 3.6, 0.4, 0.0, 3.2, 36.0));
    db.insert("butter", Nutrition::new(717.0, 0.9, 0.1, 81.0, 0.0, 0.1, 11.0));

    // Oils and fats
    db.insert("olive oil", Nutrition::new(884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 2.0));
    db.insert("coconut oil", Nutrition::new(862.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0));

    // Legumes
    db.insert("black beans", Nutrition::new(132.0, 8.9, 23.0, 0.5, 8.7, 0.3, 2.0));
    db.insert("chickpeas", Nutrition::new(164.0, 8.9, 27.0, 2.6, 7.6, 4.8, 7.0));
    db.insert("lentils", Nutrition::new(116.0, 9.0, 20.0, 0.4, 7.9, 1.8, 2.0));

    db
});

/// Default gram weights for one piece of an ingredient, used by
/// count-based units ("piece", "medium", ...).
static SERVING_SIZES: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("chicken", 150.0),
        ("beef", 120.0),
        ("pork", 120.0),
        ("fish", 150.0),
        ("salmon", 150.0),
        ("tuna", 100.0),
        ("shrimp", 100.0),
        ("eggs", 50.0),
        ("tofu", 100.0),
        ("tomatoes", 150.0),
        ("onions", 80.0),
        ("garlic", 5.0),
        ("carrots", 100.0),
        ("broccoli", 100.0),
        ("spinach", 80.0),
        ("bell peppers", 120.0),
        ("mushrooms", 80.0),
        ("rice", 150.0),
        ("pasta", 100.0),
        ("bread", 30.0),
        ("potatoes", 200.0),
        ("quinoa", 150.0),
        ("cheese", 30.0),
        ("milk", 240.0),
        ("yogurt", 150.0),
        ("butter", 14.0),
        ("olive oil", 15.0),
        ("coconut oil", 15.0),
        ("black beans", 100.0),
        ("chickpeas", 100.0),
        ("lentils", 100.0),
    ])
});

/// Display name → database key. Lookup-time folding of the most common
/// catalog spellings onto the rows above.
static NAME_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("chicken breast", "chicken"),
        ("chicken thigh", "chicken"),
        ("chicken meat", "chicken"),
        ("ground beef", "beef"),
        ("beef mince", "beef"),
        ("steak", "beef"),
        ("ground pork", "pork"),
        ("pork chop", "pork"),
        ("cherry tomatoes", "tomatoes"),
        ("roma tomatoes", "tomatoes"),
        ("plum tomatoes", "tomatoes"),
        ("yellow onion", "onions"),
        ("red onion", "onions"),
        ("white onion", "onions"),
        ("bell pepper", "bell peppers"),
        ("sweet pepper", "bell peppers"),
        ("white rice", "rice"),
        ("brown rice", "rice"),
        ("jasmine rice", "rice"),
        ("spaghetti", "pasta"),
        ("penne", "pasta"),
        ("fusilli", "pasta"),
        ("cheddar cheese", "cheese"),
        ("mozzarella cheese", "cheese"),
        ("whole milk", "milk"),
        ("skim milk", "milk"),
        ("extra virgin olive oil", "olive oil"),
        ("canned black beans", "black beans"),
        ("dried black beans", "black beans"),
    ])
});

/// Resolve a free-text ingredient name to its canonical database key.
/// Unknown names come back lower-cased but otherwise untouched; lookup
/// failure is handled by the caller falling back to [`DEFAULT_PROFILE`].
pub fn canonical_name(name: &str) -> String {
    let lowered = name.to_lowercase().trim().to_string();
    NAME_ALIASES
        .get(lowered.as_str())
        .map(|key| key.to_string())
        .unwrap_or(lowered)
}

/// Per-100g nutrient row for a canonical name, if known.
pub fn nutrition_per_100g(canonical: &str) -> Option<&'static Nutrition> {
    NUTRITION_DATABASE.get(canonical)
}

/// Default gram weight of one piece of an ingredient; 100 g for
/// ingredients without an entry.
pub fn default_serving_grams(canonical: &str) -> f64 {
    SERVING_SIZES.get(canonical).copied().unwrap_or(100.0)
}
