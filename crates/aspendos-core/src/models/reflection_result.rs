use std::fmt;

use serde::{Deserialize, Serialize};

/// The retry actions the reflection step can propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryStrategy {
    RequestMoreDetail,
    RetryWithoutMemory,
    RetryWithMemory,
}

impl RetryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestMoreDetail => "request more detailed response",
            Self::RetryWithoutMemory => "retry without memory",
            Self::RetryWithMemory => "retry with memory",
        }
    }

    /// The single flip of memory usage: used → without, unused → with.
    pub fn toggle_memory(memory_used: bool) -> Self {
        if memory_used {
            Self::RetryWithoutMemory
        } else {
            Self::RetryWithMemory
        }
    }
}

impl fmt::Display for RetryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a post-hoc quality check on a generated answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionResult {
    pub satisfied: bool,
    pub reasoning: String,
    pub retry_strategy: Option<RetryStrategy>,
}

impl ReflectionResult {
    pub fn satisfied(reasoning: impl Into<String>) -> Self {
        Self {
            satisfied: true,
            reasoning: reasoning.into(),
            retry_strategy: None,
        }
    }

    pub fn retry(reasoning: impl Into<String>, strategy: RetryStrategy) -> Self {
        Self {
            satisfied: false,
            reasoning: reasoning.into(),
            retry_strategy: Some(strategy),
        }
    }
}
