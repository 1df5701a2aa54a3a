//! Static ingredient lookup data: display variations and acceptable
//! cooking substitutions, keyed by canonical (normalized) names.
//!
//! Plain key→value maps loaded once at first use; nothing here mutates
//! after initialization.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical ingredient → alternate display names for the same thing.
static VARIATIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&str, &[&str]> = HashMap::new();
        map.insert(
            "tomato",
            &[
                "tomatoes",
                "cherry tomatoes",
                "roma tomatoes",
                "plum tomatoes",
                "vine tomatoes",
            ][..],
        );
        map.insert(
            "onion",
            &[
                "onions",
                "yellow onion",
                "white onion",
                "red onion",
                "sweet onion",
                "shallot",
            ][..],
        );
        map.insert(
            "pepper",
            &["bell pepper", "bell peppers", "capsicum", "sweet pepper"][..],
        );
        map.insert(
            "chicken",
            &["chicken breast", "chicken thigh", "chicken meat", "poultry"][..],
        );
        map.insert(
            "beef",
            &[
                "ground beef",
                "beef mince",
                "minced beef",
                "hamburger meat",
                "steak",
            ][..],
        );
        map.insert(
            "cheese",
            &[
                "cheddar cheese",
                "mozzarella cheese",
                "parmesan cheese",
                "swiss cheese",
            ][..],
        );
        map.insert(
            "pasta",
            &[
                "spaghetti",
                "penne",
                "fusilli",
                "macaroni",
                "noodles",
                "linguine",
            ][..],
        );
        map.insert(
            "rice",
            &[
                "white rice",
                "brown rice",
                "jasmine rice",
                "basmati rice",
                "wild rice",
            ][..],
        );
        map.insert(
            "oil",
            &[
                "olive oil",
                "vegetable oil",
                "cooking oil",
                "canola oil",
                "sunflower oil",
            ][..],
        );
        map.insert(
            "herb",
            &[
                "fresh herbs",
                "dried herbs",
                "basil",
                "oregano",
                "thyme",
                "rosemary",
            ][..],
        );
        map.insert(
            "spice",
            &["spices", "seasoning", "black pepper", "paprika", "cumin"][..],
        );
        map
    });

/// Canonical ingredient → ingredients acceptable as cooking replacements.
static SUBSTITUTIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&str, &[&str]> = HashMap::new();

        // Dairy
        map.insert(
            "butter",
            &["margarine", "coconut oil", "vegetable oil", "ghee"][..],
        );
        map.insert(
            "milk",
            &["almond milk", "soy milk", "coconut milk", "oat milk", "rice milk"][..],
        );
        map.insert(
            "heavy cream",
            &["coconut cream", "evaporated milk", "half and half"][..],
        );
        map.insert(
            "sour cream",
            &["greek yogurt", "plain yogurt", "creme fraiche"][..],
        );
        map.insert(
            "cheese",
            &["nutritional yeast", "cashew cheese", "vegan cheese"][..],
        );

        // Proteins
        map.insert(
            "eggs",
            &["flax eggs", "chia eggs", "applesauce", "mashed banana", "aquafaba"][..],
        );
        map.insert(
            "chicken",
            &["turkey", "tofu", "tempeh", "seitan", "cauliflower"][..],
        );
        map.insert(
            "beef",
            &["ground turkey", "lentils", "mushrooms", "plant-based meat"][..],
        );
        map.insert(
            "fish",
            &["tofu", "tempeh", "hearts of palm", "banana peels"][..],
        );

        // Flour and grains
        map.insert(
            "wheat flour",
            &["almond flour", "coconut flour", "oat flour", "rice flour"][..],
        );
        map.insert(
            "bread",
            &["tortillas", "rice cakes", "lettuce wraps", "cauliflower bread"][..],
        );
        map.insert(
            "pasta",
            &["zucchini noodles", "spaghetti squash", "shirataki noodles"][..],
        );
        map.insert(
            "rice",
            &["quinoa", "cauliflower rice", "barley", "bulgur"][..],
        );

        // Sweeteners
        map.insert(
            "sugar",
            &["honey", "maple syrup", "stevia", "agave", "coconut sugar"][..],
        );
        map.insert("honey", &["maple syrup", "agave", "brown rice syrup"][..]);

        // Other common swaps
        map.insert(
            "breadcrumbs",
            &["crushed crackers", "panko", "rolled oats", "ground nuts"][..],
        );
        map.insert(
            "wine",
            &["broth", "grape juice", "apple cider vinegar"][..],
        );
        map.insert(
            "lemon juice",
            &["lime juice", "white wine vinegar", "apple cider vinegar"][..],
        );
        map.insert(
            "garlic",
            &["garlic powder", "shallots", "onion powder"][..],
        );
        map.insert("onion", &["shallots", "leeks", "onion powder"][..]);
        map.insert("fresh herbs", &["dried herbs"][..]);
        map.insert(
            "tomato sauce",
            &["tomato paste", "crushed tomatoes", "marinara sauce"][..],
        );
        map.insert(
            "broth",
            &["bouillon", "stock", "vegetable broth", "water with seasoning"][..],
        );
        map
    });

/// Known display variants of a canonical ingredient, or an empty slice.
/// The matcher's direct substring test already covers the ingredient
/// itself, so no self-entry fallback is needed.
pub fn variations_of(canonical: &str) -> &'static [&'static str] {
    VARIATIONS.get(canonical).copied().unwrap_or(&[])
}

/// Acceptable substitutes for a canonical ingredient, or an empty slice.
pub fn substitutes_for(canonical: &str) -> &'static [&'static str] {
    SUBSTITUTIONS.get(canonical).copied().unwrap_or(&[])
}
