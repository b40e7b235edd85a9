//! OpenAI-compatible chat-completions provider.
//!
//! One user message per request, no streaming. The request-level timeout is a
//! backstop; the decision agent applies its own, shorter deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use aspendos_core::config::LlmConfig;
use aspendos_core::errors::{AspendosResult, LlmError};
use aspendos_core::traits::{GenerationRequest, ITextGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on a single HTTP round-trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions text generator.
pub struct ChatCompletionsGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    available: AtomicBool,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsGenerator {
    /// Create a generator for the configured endpoint and model.
    pub fn new(config: &LlmConfig, api_key: String) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()
            .map_err(|e| LlmError::RequestFailed {
                reason: format!("client build error: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(&config.base_url),
            model: config.model.clone(),
            api_key,
            available: AtomicBool::new(true),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reset availability (e.g., after a config change).
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    async fn send(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        timeout_ms: REQUEST_TIMEOUT.as_millis() as u64,
                    }
                } else {
                    LlmError::RequestFailed {
                        reason: format!("HTTP error: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            // Credentials will not fix themselves; stop calling until reset.
            self.available.store(false, Ordering::Relaxed);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed {
                reason: format!("provider returned {status}: {body}"),
            });
        }

        let text = response.text().await.map_err(|e| LlmError::InvalidResponse {
            reason: format!("body read error: {e}"),
        })?;
        parse_completion(&text)
    }
}

impl ITextGenerator for ChatCompletionsGenerator {
    async fn generate(&self, request: &GenerationRequest) -> AspendosResult<String> {
        if !self.is_available() {
            return Err(LlmError::ProviderUnavailable {
                provider: self.model.clone(),
            }
            .into());
        }

        debug!(model = %self.model, prompt_chars = request.prompt.len(), "sending completion request");
        match self.send(request).await {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!(model = %self.model, error = %e, "completion request failed");
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

/// Join the base URL and the chat-completions path.
pub fn chat_endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
        base.to_string()
    } else {
        format!("{base}/chat/completions")
    }
}

/// Extract the first choice's message content from a response body.
pub fn parse_completion(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse {
            reason: format!("JSON parse error: {e}"),
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| LlmError::InvalidResponse {
            reason: "empty completion".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_once() {
        assert_eq!(
            chat_endpoint("https://openrouter.ai/api/v1/"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            chat_endpoint("http://localhost:8080/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{\"type\":\"learning\"}"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), r#"{"type":"learning"}"#);
    }

    #[test]
    fn empty_choices_are_invalid() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse { .. }));

        let err =
            parse_completion(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse { .. }));
    }

    #[test]
    fn non_json_body_is_invalid() {
        let err = parse_completion("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse { .. }));
    }

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "classify this",
            }],
            temperature: 0.0,
            max_tokens: 150,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["max_tokens"], 150);
    }
}
