//! Configuration system for Aspendos.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod aspendos_config;
pub mod consolidation_config;
pub mod decision_config;
pub mod defaults;
pub mod llm_config;
pub mod observability_config;

pub use aspendos_config::AspendosConfig;
pub use consolidation_config::ConsolidationConfig;
pub use decision_config::DecisionConfig;
pub use llm_config::LlmConfig;
pub use observability_config::ObservabilityConfig;
