use serde::{Deserialize, Serialize};

use crate::tables::{substitutes_for, variations_of};

/// How a recipe ingredient was satisfied by the user's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    Exact,
    Partial,
    Substitute,
    None,
}

/// Per-ingredient match outcome: the classification plus the user
/// ingredient that satisfied it, both in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMatch {
    pub kind: MatchKind,
    pub matched_with: Option<String>,
}

impl IngredientMatch {
    fn none() -> Self {
        IngredientMatch {
            kind: MatchKind::None,
            matched_with: None,
        }
    }

    fn found(kind: MatchKind, matched_with: &str) -> Self {
        IngredientMatch {
            kind,
            matched_with: Some(matched_with.to_string()),
        }
    }
}

/// Classify the best match for one recipe ingredient against the user's
/// ingredient set. Both sides must already be normalized.
///
/// Precedence, first hit wins: exact equality, then partial (substring
/// either direction, or via the variation table), then substitution
/// (table consulted in both key directions), then none.
pub fn find_best_match(recipe_ingredient: &str, user_ingredients: &[String]) -> IngredientMatch {
    for user in user_ingredients {
        if recipe_ingredient == user {
            return IngredientMatch::found(MatchKind::Exact, user);
        }
    }

    for user in user_ingredients {
        if is_partial_match(recipe_ingredient, user) {
            return IngredientMatch::found(MatchKind::Partial, user);
        }
    }

    for user in user_ingredients {
        if are_substitutable(recipe_ingredient, user) {
            return IngredientMatch::found(MatchKind::Substitute, user);
        }
    }

    IngredientMatch::none()
}

/// Substring containment in either direction, or a variation-table hit.
///
/// The generosity is intentional: "onion" partially matches
/// "onion powder" and vice versa.
pub fn is_partial_match(recipe_ingredient: &str, user_ingredient: &str) -> bool {
    if contains_either(recipe_ingredient, user_ingredient) {
        return true;
    }

    variations_of(recipe_ingredient)
        .iter()
        .any(|variation| *variation == user_ingredient || contains_either(variation, user_ingredient))
}

/// Substitution-table hit, tested with the recipe ingredient as key and
/// then the user ingredient as key, using the same equality/substring rule.
pub fn are_substitutable(recipe_ingredient: &str, user_ingredient: &str) -> bool {
    let forward = substitutes_for(recipe_ingredient)
        .iter()
        .any(|sub| *sub == user_ingredient || contains_either(sub, user_ingredient));
    if forward {
        return true;
    }

    substitutes_for(user_ingredient)
        .iter()
        .any(|sub| *sub == recipe_ingredient || contains_either(sub, recipe_ingredient))
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn normalized(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| normalize(i)).collect()
    }

    #[test]
    fn test_exact_after_normalization() {
        // "onions" and "onion" both normalize to "onion".
        let user = normalized(&["onions"]);
        let m = find_best_match(&normalize("onion"), &user);
        assert_eq!(m.kind, MatchKind::Exact);
        assert_eq!(m.matched_with.as_deref(), Some("onion"));
    }

    #[test]
    fn test_partial_by_substring_both_directions() {
        let user = normalized(&["onion"]);
        let m = find_best_match(&normalize("onion powder"), &user);
        assert_eq!(m.kind, MatchKind::Partial);

        let user = normalized(&["onion powder"]);
        let m = find_best_match(&normalize("onion"), &user);
        assert_eq!(m.kind, MatchKind::Partial);
    }

    #[test]
    fn test_partial_via_variation_table() {
        // "rice" has "jasmine rice" as a known variation.
        let user = normalized(&["jasmine rice"]);
        let m = find_best_match(&normalize("rice"), &user);
        // Substring already catches this; the table also covers variants
        // that share no substring, like pasta -> spaghetti.
        assert_eq!(m.kind, MatchKind::Partial);

        let user = normalized(&["spaghetti"]);
        let m = find_best_match(&normalize("pasta"), &user);
        assert_eq!(m.kind, MatchKind::Partial);
    }

    #[test]
    fn test_substitute_forward() {
        let user = normalized(&["margarine"]);
        let m = find_best_match(&normalize("butter"), &user);
        assert_eq!(m.kind, MatchKind::Substitute);
        assert_eq!(m.matched_with.as_deref(), Some("margarine"));
    }

    #[test]
    fn test_substitute_reverse_direction() {
        // The table maps butter -> margarine; a recipe calling for
        // margarine still matches a user who has butter.
        let user = normalized(&["butter"]);
        let m = find_best_match(&normalize("margarine"), &user);
        assert_eq!(m.kind, MatchKind::Substitute);
    }

    #[test]
    fn test_no_match() {
        let user = normalized(&["chocolate"]);
        let m = find_best_match(&normalize("salmon"), &user);
        assert_eq!(m.kind, MatchKind::None);
        assert!(m.matched_with.is_none());
    }

    #[test]
    fn test_exact_wins_over_partial() {
        // "rice" is present both exactly and as a substring of
        // "rice vinegar"; exact must win.
        let user = normalized(&["rice vinegar", "rice"]);
        let m = find_best_match(&normalize("rice"), &user);
        assert_eq!(m.kind, MatchKind::Exact);
        assert_eq!(m.matched_with.as_deref(), Some("rice"));
    }

    #[test]
    fn test_known_false_positive_preserved() {
        // Substring generosity means "pea" matches "peanut". This is a
        // documented heuristic, not a defect to fix.
        let user = normalized(&["peanut"]);
        let m = find_best_match("pea", &user);
        assert_eq!(m.kind, MatchKind::Partial);
    }
}
