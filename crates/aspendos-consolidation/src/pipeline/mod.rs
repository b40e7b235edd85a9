//! 4-phase consolidation planner.
//!
//! Phase 1: Grouping → Phase 2: Dedup → Phase 3: Decay → Phase 4: Summary
//!
//! Pure: no I/O, no mutation of the input. Records named in the plan may have
//! changed in storage by the time it is applied, so the caller re-validates
//! before writing.

pub mod phase1_grouping;
pub mod phase2_dedup;
pub mod phase3_decay;
pub mod phase4_summary;

use aspendos_core::memory::MemoryRecord;
use aspendos_core::models::{ConsolidationOptions, ConsolidationPlan, MergeInstruction};
use aspendos_observability::events;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Plan consolidation of one user's memories as of now.
pub fn consolidate_memories(
    memories: &[MemoryRecord],
    options: &ConsolidationOptions,
) -> ConsolidationPlan {
    consolidate_memories_at(memories, options, Utc::now())
}

/// Plan consolidation with an explicit clock.
pub fn consolidate_memories_at(
    memories: &[MemoryRecord],
    options: &ConsolidationOptions,
    now: DateTime<Utc>,
) -> ConsolidationPlan {
    let _span = aspendos_observability::consolidation_span!(memories.len()).entered();

    // Phase 1: Grouping.
    let groups = phase1_grouping::group_by_sector(memories);
    debug!(groups = groups.len(), "Phase 1: grouped by sector");

    // Phase 2: Dedup.
    let pairs = phase2_dedup::find_duplicates(memories, &groups, options.similarity_threshold);
    debug!(pairs = pairs.len(), "Phase 2: duplicate scan complete");

    // Phase 3: Decay.
    let decays = phase3_decay::compute_decay(memories, options, now);
    for (_, d) in &decays {
        events::memory_decayed(&d.id, d.kind.as_str(), d.previous_salience, d.new_salience);
    }

    // Phase 4: Summary.
    let result = phase4_summary::summarize(memories.len(), &pairs, &decays);
    events::consolidation_planned(result.merged, result.decayed, result.preserved);

    ConsolidationPlan {
        result,
        merges: pairs
            .iter()
            .map(|p| MergeInstruction {
                keep: memories[p.keep].id.clone(),
                remove: memories[p.remove].id.clone(),
                similarity: p.similarity,
            })
            .collect(),
        decays: decays.into_iter().map(|(_, d)| d).collect(),
    }
}
