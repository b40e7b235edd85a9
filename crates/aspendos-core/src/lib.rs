//! # aspendos-core
//!
//! Foundation crate for the Aspendos memory engine.
//! Defines the query/sector vocabulary, decision and consolidation models,
//! the text-generation trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod query;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AspendosConfig;
pub use errors::{AspendosError, AspendosResult};
pub use memory::{MemoryRecord, MemorySector};
pub use models::{
    ConsolidationPlan, ConsolidationResult, LlmClassification, MemoryDecision, ReflectionResult,
    RetryStrategy,
};
pub use query::QueryType;
