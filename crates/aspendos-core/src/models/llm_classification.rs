use serde::Serialize;

use crate::constants::FAIL_OPEN_CONFIDENCE;
use crate::memory::MemorySector;
use crate::query::QueryType;

/// Result of asking the text-generation service to classify a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmClassification {
    pub query_type: QueryType,
    pub confidence: f64,
    pub use_memory: bool,
    pub sectors: Vec<MemorySector>,
}

impl LlmClassification {
    /// The answer used whenever the model could not be consulted or its
    /// reply could not be validated: retrieve from the broad sectors.
    pub fn fail_open() -> Self {
        Self {
            query_type: QueryType::Unknown,
            confidence: FAIL_OPEN_CONFIDENCE,
            use_memory: true,
            sectors: vec![MemorySector::Semantic, MemorySector::Procedural],
        }
    }
}
