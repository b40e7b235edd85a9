//! # aspendos-consolidation
//!
//! 4-phase consolidation planner: grouping → dedup (Jaccard) → decay → summary.
//! Produces merge and decay instructions for a user's memory set; applying
//! them to storage is the caller's job.

pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use algorithms::similarity::jaccard_similarity;
pub use engine::ConsolidationEngine;
pub use pipeline::{consolidate_memories, consolidate_memories_at};
