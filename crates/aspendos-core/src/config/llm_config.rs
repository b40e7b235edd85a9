use serde::{Deserialize, Serialize};

use super::defaults;

/// Text-generation client configuration (OpenAI-compatible endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Completion token cap.
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_LLM_BASE_URL.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_LLM_API_KEY_ENV.to_string(),
            max_tokens: defaults::DEFAULT_LLM_MAX_TOKENS,
        }
    }
}
