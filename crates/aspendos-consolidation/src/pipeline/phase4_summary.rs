//! Phase 4: Summary. Count pairs and records.

use std::collections::HashSet;

use aspendos_core::models::{ConsolidationResult, DecayInstruction};

use super::phase2_dedup::DuplicatePair;

/// Summarize the plan for `total` input records.
///
/// `merged` counts pairs. Record-level counts are computed over unique input
/// indices so that `preserved + |removal ∪ decayed| == total`.
pub fn summarize(
    total: usize,
    pairs: &[DuplicatePair],
    decays: &[(usize, DecayInstruction)],
) -> ConsolidationResult {
    let removal: HashSet<usize> = pairs.iter().map(|p| p.remove).collect();
    let decayed: HashSet<usize> = decays.iter().map(|(index, _)| *index).collect();
    let touched = removal.union(&decayed).count();

    ConsolidationResult {
        merged: pairs.len(),
        removal_candidates: removal.len(),
        decayed: decayed.len(),
        preserved: total - touched,
    }
}
