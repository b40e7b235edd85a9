//! Generator used when no real provider is configured.

use aspendos_core::errors::{AspendosResult, LlmError};
use aspendos_core::traits::{GenerationRequest, ITextGenerator};

/// Always fails with `ProviderUnavailable`.
#[derive(Debug, Clone)]
pub struct UnavailableGenerator {
    reason: String,
}

impl UnavailableGenerator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl ITextGenerator for UnavailableGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> AspendosResult<String> {
        Err(LlmError::ProviderUnavailable {
            provider: format!("unavailable ({})", self.reason),
        }
        .into())
    }

    fn name(&self) -> &str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }
}
