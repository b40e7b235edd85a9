//! Word tokenization shared by reflection relevance and duplicate detection.

use std::collections::HashSet;

/// Lowercased, deduplicated words of `text` longer than `min_exclusive` characters.
///
/// Words are maximal runs of alphanumeric characters; apostrophes inside a
/// word are kept so contractions stay whole.
pub fn word_set(text: &str, min_exclusive: usize) -> HashSet<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| w.chars().count() > min_exclusive)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_dedups_and_filters_by_length() {
        let words = word_set("The cat, the CAT and a dog!", 2);
        let expected: HashSet<String> = ["the", "cat", "and", "dog"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn keeps_contractions_and_strips_quotes() {
        let words = word_set("'don't' stop", 3);
        assert!(words.contains("don't"));
        assert!(words.contains("stop"));
    }

    #[test]
    fn empty_text_is_empty_set() {
        assert!(word_set("", 0).is_empty());
        assert!(word_set("a an it", 2).is_empty());
    }
}
