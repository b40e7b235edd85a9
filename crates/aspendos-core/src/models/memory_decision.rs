use serde::Serialize;

use crate::memory::{cap_unique, MemorySector};
use crate::query::QueryType;

/// Whether and how to use memory for one query.
///
/// Built once per query and read-only afterwards. The constructor enforces
/// the value invariants: at most [`MAX_SECTORS`](crate::constants::MAX_SECTORS) unique sectors in first-seen
/// order, `threshold` and `confidence` in [0, 1], `cost` non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDecision {
    use_memory: bool,
    reasoning: String,
    sectors: Vec<MemorySector>,
    threshold: f64,
    cost: f64,
    query_type: QueryType,
    confidence: f64,
}

impl MemoryDecision {
    pub fn new(
        use_memory: bool,
        reasoning: impl Into<String>,
        sectors: impl IntoIterator<Item = MemorySector>,
        threshold: f64,
        cost: f64,
        query_type: QueryType,
        confidence: f64,
    ) -> Self {
        Self {
            use_memory,
            reasoning: reasoning.into(),
            sectors: cap_unique(sectors),
            threshold: clamp_unit(threshold),
            cost: if cost.is_finite() { cost.max(0.0) } else { 0.0 },
            query_type,
            confidence: clamp_unit(confidence),
        }
    }

    /// A decision that skips memory entirely.
    pub fn skip(query_type: QueryType, reasoning: impl Into<String>, confidence: f64) -> Self {
        Self::new(false, reasoning, [], 0.0, 0.0, query_type, confidence)
    }

    pub fn use_memory(&self) -> bool {
        self.use_memory
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn sectors(&self) -> &[MemorySector] {
        &self.sectors
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
