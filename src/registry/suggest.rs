//! Near-match suggestions for mistyped template names.
//!
//! Candidates are scored with the Sørensen-Dice coefficient over character
//! bigrams. Comparison is case-insensitive.

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Candidates scoring below this are not considered similar.
const MIN_SIMILARITY: f64 = 0.25;

/// Bigram similarity of two words in `0.0..=1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(&a.to_lowercase(), &b.to_lowercase())
}

/// Up to [`MAX_SUGGESTIONS`] candidates similar to `query`, sorted alphabetically.
///
/// Returns an empty list when nothing is similar.
pub fn closest_matches<'a, I>(query: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(|c| (similarity(query, c), c))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    let mut matches: Vec<String> = scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, c)| c.to_string())
        .collect();
    matches.sort();
    matches
}
