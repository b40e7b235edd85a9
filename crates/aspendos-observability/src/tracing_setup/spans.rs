//! Span definitions per operation: decision, llm fallback, reflection, consolidation.

/// Create a decision span.
#[macro_export]
macro_rules! decision_span {
    ($query_len:expr) => {
        tracing::info_span!("aspendos.decision", query_len = $query_len)
    };
}

/// Create an LLM classification span.
#[macro_export]
macro_rules! llm_classification_span {
    ($provider:expr) => {
        tracing::info_span!("aspendos.llm_classification", provider = %$provider)
    };
}

/// Create a consolidation span.
#[macro_export]
macro_rules! consolidation_span {
    ($batch_size:expr) => {
        tracing::info_span!("aspendos.consolidation", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const DECISION: &str = "aspendos.decision";
    pub const LLM_CLASSIFICATION: &str = "aspendos.llm_classification";
    pub const CONSOLIDATION: &str = "aspendos.consolidation";
}
