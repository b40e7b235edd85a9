//! # aspendos-llm
//!
//! Text-generation providers behind [`aspendos_core::traits::ITextGenerator`].
//!
//! - `ChatCompletionsGenerator`: any OpenAI-compatible `/chat/completions`
//!   endpoint (OpenAI, OpenRouter, local gateways).
//! - `UnavailableGenerator`: always errors, so the classifier fails open.

pub mod chat_completions;
pub mod unavailable;

pub use chat_completions::ChatCompletionsGenerator;
pub use unavailable::UnavailableGenerator;

use aspendos_core::config::LlmConfig;
use aspendos_core::errors::AspendosResult;
use aspendos_core::traits::{GenerationRequest, ITextGenerator};
use tracing::{info, warn};

/// The generator selected by [`create_generator`].
///
/// `ITextGenerator` uses `async fn`, so providers are selected through an
/// enum rather than a trait object.
pub enum Generator {
    ChatCompletions(ChatCompletionsGenerator),
    Unavailable(UnavailableGenerator),
}

impl ITextGenerator for Generator {
    async fn generate(&self, request: &GenerationRequest) -> AspendosResult<String> {
        match self {
            Self::ChatCompletions(g) => g.generate(request).await,
            Self::Unavailable(g) => g.generate(request).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::ChatCompletions(g) => g.name(),
            Self::Unavailable(g) => g.name(),
        }
    }

    fn is_available(&self) -> bool {
        match self {
            Self::ChatCompletions(g) => g.is_available(),
            Self::Unavailable(g) => g.is_available(),
        }
    }
}

/// Build the configured generator.
///
/// Falls back to [`UnavailableGenerator`] when no API key is set or the HTTP
/// client cannot be built; decisions then take the fail-open path.
pub fn create_generator(config: &LlmConfig) -> Generator {
    let Some(api_key) = config.api_key() else {
        warn!(
            env = %config.api_key_env,
            "no API key configured, model classification disabled"
        );
        return Generator::Unavailable(UnavailableGenerator::new("missing API key"));
    };

    match ChatCompletionsGenerator::new(config, api_key) {
        Ok(g) => {
            info!(model = %config.model, base_url = %config.base_url, "text generator ready");
            Generator::ChatCompletions(g)
        }
        Err(e) => {
            warn!(error = %e, "text generator failed to build, falling back");
            Generator::Unavailable(UnavailableGenerator::new("client build failed"))
        }
    }
}
