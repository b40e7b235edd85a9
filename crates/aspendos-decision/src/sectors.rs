//! Sector selection: which memory sectors to retrieve from for a query.

use aspendos_core::memory::{cap_unique, MemorySector};
use aspendos_core::query::QueryType;

/// Temporal references pull in episodic memory.
const TEMPORAL_CUES: &[&str] = &[
    "yesterday",
    "last week",
    "recently",
    "before",
    "earlier",
    "remember when",
];

/// Affect words pull in emotional memory.
const AFFECT_CUES: &[&str] = &["feel", "emotion", "happy", "sad", "stressed", "excited"];

/// Process words pull in procedural memory.
const PROCESS_CUES: &[&str] = &["how do i", "my process", "my workflow", "step by step"];

/// Heuristic additions, in the order they are appended.
const HEURISTICS: [(MemorySector, &[&str]); 3] = [
    (MemorySector::Episodic, TEMPORAL_CUES),
    (MemorySector::Emotional, AFFECT_CUES),
    (MemorySector::Procedural, PROCESS_CUES),
];

/// Priority-ordered base sectors for a query type.
pub fn base_sectors(query_type: QueryType) -> &'static [MemorySector] {
    use MemorySector::*;
    match query_type {
        QueryType::GeneralKnowledge => &[],
        QueryType::TechnicalAdvice => &[Semantic, Procedural],
        QueryType::Debugging => &[Procedural, Episodic],
        QueryType::PersonalReflection => &[Emotional, Reflective, Episodic],
        QueryType::CodeReview => &[Procedural, Semantic],
        QueryType::Learning => &[Semantic, Reflective],
        QueryType::Creative => &[Emotional, Episodic],
        QueryType::Unknown => &[Semantic, Procedural],
    }
}

/// Select up to [`MAX_SECTORS`](aspendos_core::constants::MAX_SECTORS) unique sectors for a query.
///
/// Base sectors come first, so they survive truncation ahead of any
/// heuristic addition.
pub fn select_sectors(query: &str, query_type: QueryType) -> Vec<MemorySector> {
    let lowered = query.to_lowercase();
    let additions = HEURISTICS
        .iter()
        .filter(|(_, cues)| cues.iter().any(|cue| lowered.contains(cue)))
        .map(|(sector, _)| *sector);

    cap_unique(base_sectors(query_type).iter().copied().chain(additions))
}

#[cfg(test)]
mod tests {
    use aspendos_core::constants::MAX_SECTORS;

    use super::*;
    use MemorySector::*;

    #[test]
    fn base_lists_are_unique_and_bounded() {
        for query_type in QueryType::ALL {
            let base = base_sectors(query_type);
            assert!(base.len() <= MAX_SECTORS, "{query_type}");
            assert_eq!(cap_unique(base.iter().copied()), base, "{query_type}");
        }
    }

    #[test]
    fn technical_advice_without_cues_uses_base() {
        assert_eq!(
            select_sectors("How should I architect my React component?", QueryType::TechnicalAdvice),
            vec![Semantic, Procedural]
        );
    }

    #[test]
    fn heuristics_append_in_fixed_order() {
        // Both temporal and affect cues; episodic is appended before emotional.
        assert_eq!(
            select_sectors("I felt stressed yesterday", QueryType::Learning),
            vec![Semantic, Reflective, Episodic]
        );
        assert_eq!(
            select_sectors("i feel excited", QueryType::TechnicalAdvice),
            vec![Semantic, Procedural, Emotional]
        );
    }

    #[test]
    fn heuristics_skip_sectors_already_present() {
        // Debugging already has episodic; the temporal cue adds nothing new.
        assert_eq!(
            select_sectors("it worked yesterday", QueryType::Debugging),
            vec![Procedural, Episodic]
        );
    }

    #[test]
    fn base_wins_over_additions_on_truncation() {
        assert_eq!(
            select_sectors(
                "Remember when I felt sad? How do I fix my workflow step by step",
                QueryType::PersonalReflection
            ),
            vec![Emotional, Reflective, Episodic]
        );
    }

    #[test]
    fn general_knowledge_can_still_gain_heuristic_sectors() {
        assert_eq!(
            select_sectors("how do i feel about this", QueryType::GeneralKnowledge),
            vec![Emotional, Procedural]
        );
    }

    #[test]
    fn cue_matching_is_case_insensitive() {
        assert_eq!(
            select_sectors("STEP BY STEP please", QueryType::Learning),
            vec![Semantic, Reflective, Procedural]
        );
    }
}
