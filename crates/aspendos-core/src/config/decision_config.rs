use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Deadline for the LLM classification fallback. On expiry the agent
    /// fails open.
    pub llm_timeout_ms: u64,
    /// Queries are truncated to this many characters before prompting.
    pub max_prompt_chars: usize,
    /// Retrieval threshold for queries the matrix routes to memory.
    pub memory_threshold: f64,
    /// Retrieval threshold for queries classified by the model.
    pub llm_threshold: f64,
    /// Estimated cost of one fallback classification call.
    pub llm_classification_cost: f64,
}

impl DecisionConfig {
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_millis(self.llm_timeout_ms)
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            llm_timeout_ms: defaults::DEFAULT_LLM_TIMEOUT_MS,
            max_prompt_chars: defaults::DEFAULT_MAX_PROMPT_CHARS,
            memory_threshold: defaults::DEFAULT_MEMORY_THRESHOLD,
            llm_threshold: defaults::DEFAULT_LLM_THRESHOLD,
            llm_classification_cost: defaults::DEFAULT_LLM_CLASSIFICATION_COST,
        }
    }
}
