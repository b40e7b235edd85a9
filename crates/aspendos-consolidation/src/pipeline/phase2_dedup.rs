//! Phase 2: Dedup. Pairwise Jaccard comparison within each sector.
//!
//! O(n²) in the size of the largest sector group. Comparison never crosses
//! sectors. Groups are independent and scanned in parallel.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use aspendos_core::memory::{MemoryRecord, MemorySector};
use rayon::prelude::*;

use crate::algorithms::similarity::{jaccard_of_sets, tokenize};

/// A duplicate pair, by input index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicatePair {
    pub keep: usize,
    pub remove: usize,
    pub similarity: f64,
}

/// Find every same-sector pair at or above `threshold`.
///
/// Pairs come out grouped by sector, then in input order.
pub fn find_duplicates(
    memories: &[MemoryRecord],
    groups: &BTreeMap<MemorySector, Vec<usize>>,
    threshold: f64,
) -> Vec<DuplicatePair> {
    let tokens: Vec<HashSet<String>> = memories
        .par_iter()
        .map(|m| tokenize(&m.content))
        .collect();

    let per_group: Vec<Vec<DuplicatePair>> = groups
        .values()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|indices| scan_group(memories, &tokens, indices, threshold))
        .collect();

    per_group.into_iter().flatten().collect()
}

fn scan_group(
    memories: &[MemoryRecord],
    tokens: &[HashSet<String>],
    indices: &[usize],
    threshold: f64,
) -> Vec<DuplicatePair> {
    let mut pairs = Vec::new();
    for (pos, &i) in indices.iter().enumerate() {
        for &j in &indices[pos + 1..] {
            let similarity = jaccard_of_sets(&tokens[i], &tokens[j]);
            if similarity >= threshold {
                let (keep, remove) = if survives(&memories[i], &memories[j]) {
                    (i, j)
                } else {
                    (j, i)
                };
                pairs.push(DuplicatePair {
                    keep,
                    remove,
                    similarity,
                });
            }
        }
    }
    pairs
}

/// Whether `a` is kept over `b`: higher salience wins, then the smaller id,
/// then the smaller content, then the earlier timestamp. Records equal on all
/// of these are interchangeable, so the outcome never depends on input order.
fn survives(a: &MemoryRecord, b: &MemoryRecord) -> bool {
    let order = b
        .salience
        .total_cmp(&a.salience)
        .then_with(|| a.id.cmp(&b.id))
        .then_with(|| a.content.cmp(&b.content))
        .then_with(|| a.created_at.cmp(&b.created_at));
    order != Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phase1_grouping::group_by_sector;

    fn scan(memories: &[MemoryRecord], threshold: f64) -> Vec<DuplicatePair> {
        find_duplicates(memories, &group_by_sector(memories), threshold)
    }

    #[test]
    fn higher_salience_is_kept() {
        let memories = vec![
            MemoryRecord::new("low", "prefers dark mode everywhere").with_salience(0.2),
            MemoryRecord::new("high", "Prefers dark mode everywhere!").with_salience(0.9),
        ];
        let pairs = scan(&memories, 0.85);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].keep, 1);
        assert_eq!(pairs[0].remove, 0);
        assert_eq!(pairs[0].similarity, 1.0);
    }

    #[test]
    fn equal_salience_keeps_smaller_id() {
        let memories = vec![
            MemoryRecord::new("m-2", "prefers dark mode everywhere").with_salience(0.5),
            MemoryRecord::new("m-1", "prefers dark mode everywhere").with_salience(0.5),
        ];
        let pairs = scan(&memories, 0.85);
        assert_eq!(memories[pairs[0].keep].id, "m-1");
    }

    #[test]
    fn duplicate_ids_resolve_the_same_way_in_either_order() {
        let plain = MemoryRecord::new("m-1", "prefers dark mode everywhere").with_salience(0.5);
        let loud = MemoryRecord::new("m-1", "Prefers dark mode everywhere!").with_salience(0.5);

        let forward = vec![plain.clone(), loud.clone()];
        let backward = vec![loud, plain];
        let kept_forward = &forward[scan(&forward, 0.85)[0].keep];
        let kept_backward = &backward[scan(&backward, 0.85)[0].keep];
        assert_eq!(kept_forward, kept_backward);
    }

    #[test]
    fn identical_content_in_different_sectors_is_not_merged() {
        let memories = vec![
            MemoryRecord::new("a", "prefers dark mode everywhere"),
            MemoryRecord::new("b", "prefers dark mode everywhere")
                .with_sector(MemorySector::Procedural),
        ];
        assert!(scan(&memories, 0.85).is_empty());
    }

    #[test]
    fn below_threshold_is_not_a_pair() {
        let memories = vec![
            MemoryRecord::new("a", "likes rust and tokio"),
            MemoryRecord::new("b", "likes rust and axum"),
        ];
        assert!(scan(&memories, 0.85).is_empty());
        assert_eq!(scan(&memories, 0.6).len(), 1);
    }

    #[test]
    fn every_pair_in_a_cluster_is_reported() {
        let memories: Vec<MemoryRecord> = (0..4)
            .map(|i| MemoryRecord::new(format!("m{i}"), "same words every time"))
            .collect();
        // 4 choose 2.
        assert_eq!(scan(&memories, 0.85).len(), 6);
    }
}
