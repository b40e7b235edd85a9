use crate::errors::AspendosResult;

/// A single prompt sent to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationRequest {
    /// A deterministic (temperature 0) request.
    pub fn deterministic(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.0,
            max_tokens,
        }
    }
}

/// Text-generation service.
///
/// Implementations return the raw completion text; callers own parsing and
/// validation of whatever structure they asked for.
#[allow(async_fn_in_trait)]
pub trait ITextGenerator: Send + Sync {
    /// Generate a completion for the request.
    async fn generate(&self, request: &GenerationRequest) -> AspendosResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this generator can currently serve requests.
    fn is_available(&self) -> bool;
}
