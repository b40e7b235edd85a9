//! Property tests for aspendos-consolidation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use aspendos_consolidation::{consolidate_memories_at, jaccard_similarity};
use aspendos_core::memory::{MemoryRecord, MemorySector};
use aspendos_core::models::ConsolidationOptions;
use test_fixtures::{record, reference_now};

const WORDS: &[&str] = &[
    "rust", "tokio", "dark", "mode", "editor", "hiking", "coffee", "journal", "review", "async",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 0..5).prop_map(|w| w.join(" "))
}

fn memory_set() -> impl Strategy<Value = Vec<MemoryRecord>> {
    prop::collection::vec(
        (
            sentence(),
            prop::sample::select(MemorySector::ALL.to_vec()),
            prop::sample::select(vec![0.0, 0.1, 0.3, 0.5, 0.9]),
            0i64..200,
        ),
        0..12,
    )
    .prop_map(|rows| {
        let now = reference_now();
        rows.into_iter()
            .enumerate()
            .map(|(i, (content, sector, salience, age))| {
                record(&format!("m{i:02}"), &content, sector, salience, age, now)
            })
            .collect()
    })
}

// Jaccard is symmetric and bounded.
proptest! {
    #[test]
    fn prop_jaccard_symmetric(a in sentence(), b in sentence()) {
        let ab = jaccard_similarity(&a, &b);
        let ba = jaccard_similarity(&b, &a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }
}

// Identical non-empty text has similarity 1.
proptest! {
    #[test]
    fn prop_jaccard_identity(a in "[a-z]{3,8}( [a-z]{3,8}){0,5}") {
        prop_assert_eq!(jaccard_similarity(&a, &a), 1.0);
    }
}

// No shared token longer than 2 characters means similarity 0.
proptest! {
    #[test]
    fn prop_jaccard_disjoint(a in "[a-m]{3,8}", b in "[n-z]{3,8}") {
        prop_assert_eq!(jaccard_similarity(&a, &b), 0.0);
    }
}

// Permuting the input leaves every count unchanged.
proptest! {
    #[test]
    fn prop_permutation_invariant(
        memories in memory_set(),
        seed in any::<u64>(),
    ) {
        let now = reference_now();
        let options = ConsolidationOptions::default();
        let baseline = consolidate_memories_at(&memories, &options, now);

        let mut shuffled = memories.clone();
        // Deterministic Fisher-Yates driven by the seed.
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        let permuted = consolidate_memories_at(&shuffled, &options, now);

        prop_assert_eq!(baseline.result, permuted.result);
    }
}

// Record-level counts always partition the input.
proptest! {
    #[test]
    fn prop_counts_partition_input(memories in memory_set()) {
        let plan = consolidate_memories_at(&memories, &ConsolidationOptions::default(), reference_now());
        let removed: BTreeSet<&str> = plan.merges.iter().map(|m| m.remove.as_str()).collect();
        let decayed: BTreeSet<&str> = plan.decays.iter().map(|d| d.id.as_str()).collect();
        let touched = removed.union(&decayed).count();

        prop_assert_eq!(plan.result.removal_candidates, removed.len());
        prop_assert_eq!(plan.result.decayed, decayed.len());
        prop_assert!(plan.result.removal_candidates <= plan.result.merged);
        prop_assert_eq!(plan.result.preserved + touched, memories.len());
    }
}
