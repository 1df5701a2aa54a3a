/// Canonicalize a free-text ingredient name for comparison.
///
/// Lower-cases, strips punctuation, collapses whitespace runs, trims,
/// and removes one trailing `s` as a naive de-pluralization. The plural
/// rule is deliberately naive: "tomatoes" becomes "tomatoe", not
/// "tomato". The variation table absorbs the common irregulars, and
/// ranking quality depends on the current behavior, so the heuristic
/// stays as-is.
///
/// Always returns a string; empty or whitespace-only input yields "".
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(ingredient: &str) -> String {
    const PUNCTUATION: &[char] = &[
        '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
        '~', '(', ')',
    ];

    let lowered = ingredient.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !PUNCTUATION.contains(c)).collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut last_was_space = false;
    for c in stripped.trim().chars() {
        if c.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }

    // Stripping a lone trailing `s` token can leave a dangling space,
    // so trim once more before returning.
    let trimmed = collapsed.trim();
    trimmed
        .strip_suffix('s')
        .unwrap_or(trimmed)
        .trim_end()
        .to_string()
}

/// Normalize a whole user ingredient list in one pass.
pub fn normalize_all(ingredients: &[String]) -> Vec<String> {
    ingredients.iter().map(|i| normalize(i)).collect()
}
