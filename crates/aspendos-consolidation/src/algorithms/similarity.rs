//! Word-level Jaccard similarity for cheap duplicate detection.

use std::collections::HashSet;

use aspendos_core::constants::SIMILARITY_MIN_TOKEN_CHARS;
use aspendos_core::text::word_set;

/// Tokenize text the way duplicate detection compares it.
pub fn tokenize(text: &str) -> HashSet<String> {
    word_set(text, SIMILARITY_MIN_TOKEN_CHARS)
}

/// |A ∩ B| / |A ∪ B| over words longer than 2 characters, case-insensitive.
///
/// Two empty token sets are identical (1.0); one empty set shares nothing (0.0).
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    jaccard_of_sets(&tokenize(a), &tokenize(b))
}

/// Jaccard similarity of pre-tokenized sets.
pub fn jaccard_of_sets(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
