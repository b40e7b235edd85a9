//! Value types produced by the decision and consolidation engines.

pub mod consolidation_result;
pub mod llm_classification;
pub mod memory_decision;
pub mod reflection_result;

pub use consolidation_result::{
    ConsolidationOptions, ConsolidationPlan, ConsolidationResult, DecayInstruction, DecayKind,
    MergeInstruction,
};
pub use llm_classification::LlmClassification;
pub use memory_decision::MemoryDecision;
pub use reflection_result::{ReflectionResult, RetryStrategy};
