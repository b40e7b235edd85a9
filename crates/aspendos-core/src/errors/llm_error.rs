/// Text-generation subsystem errors.
///
/// None of these reach a decision: the classifier maps every variant to the
/// same fail-open classification.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("schema violation: {field}: {reason}")]
    SchemaViolation { field: String, reason: String },
}
