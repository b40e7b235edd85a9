//! Model-backed classification for queries no rule matched.
//!
//! Every way the call can go wrong (provider down, deadline, unparseable or
//! schema-violating reply) lands on [`LlmClassification::fail_open`].

use aspendos_core::config::DecisionConfig;
use aspendos_core::constants::{LLM_RECOGNIZED_CONFIDENCE, LLM_UNRECOGNIZED_CONFIDENCE};
use aspendos_core::errors::LlmError;
use aspendos_core::memory::{cap_unique, MemorySector};
use aspendos_core::query::QueryType;
use aspendos_core::traits::{GenerationRequest, ITextGenerator};
use aspendos_core::LlmClassification;
use aspendos_observability::events;
use serde::Deserialize;
use serde_json::Value;
use tracing::Instrument;

use crate::sectors::base_sectors;

/// The reply shape the model is asked for.
///
/// `type` is required. `useMemory` counts as true unless it is exactly
/// `false`. Non-string sector entries are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LlmVerdict {
    #[serde(rename = "type")]
    pub query_type: String,
    #[serde(default, rename = "useMemory")]
    pub use_memory: Option<Value>,
    #[serde(default)]
    pub sectors: Option<Vec<Value>>,
}

impl LlmVerdict {
    /// Coerce the raw verdict into a classification.
    pub fn into_classification(self) -> LlmClassification {
        let recognized = QueryType::parse_lenient(&self.query_type)
            .filter(|t| *t != QueryType::Unknown);
        let query_type = recognized.unwrap_or(QueryType::Unknown);
        let confidence = if recognized.is_some() {
            LLM_RECOGNIZED_CONFIDENCE
        } else {
            LLM_UNRECOGNIZED_CONFIDENCE
        };

        let named = self
            .sectors
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .filter_map(MemorySector::parse_lenient)
            .collect::<Vec<_>>();
        let sectors = if named.is_empty() {
            base_sectors(query_type).to_vec()
        } else {
            cap_unique(named)
        };

        LlmClassification {
            query_type,
            confidence,
            use_memory: !matches!(self.use_memory, Some(Value::Bool(false))),
            sectors,
        }
    }
}

/// Build the classification prompt. The query is cut to `max_chars` characters.
pub fn build_prompt(query: &str, max_chars: usize) -> String {
    let truncated: String = query.chars().take(max_chars).collect();
    let types = QueryType::ALL
        .iter()
        .map(QueryType::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let sectors = MemorySector::ALL
        .iter()
        .map(MemorySector::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Classify the user query for a memory-augmented assistant.\n\
         Query: \"{truncated}\"\n\n\
         Respond with only a JSON object of the form \
         {{\"type\": string, \"useMemory\": boolean, \"sectors\": string[]}}.\n\
         type must be one of: {types}.\n\
         sectors lists up to 3 of: {sectors}."
    )
}

/// Parse a model reply into a verdict. Markdown code fences are tolerated.
pub fn parse_verdict(raw: &str) -> Result<LlmVerdict, LlmError> {
    let body = strip_code_fence(raw);
    let value: Value = serde_json::from_str(body).map_err(|e| LlmError::InvalidResponse {
        reason: format!("reply is not JSON: {e}"),
    })?;
    if !value.is_object() {
        return Err(LlmError::SchemaViolation {
            field: "<root>".to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }
    serde_json::from_value(value).map_err(|e| LlmError::SchemaViolation {
        field: "type".to_string(),
        reason: e.to_string(),
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().trim_end_matches("```").trim()
}

/// Ask the model to classify `query`, failing open on any problem.
pub async fn classify_with_llm<G: ITextGenerator>(
    generator: &G,
    query: &str,
    config: &DecisionConfig,
    max_tokens: u32,
) -> LlmClassification {
    let span = aspendos_observability::llm_classification_span!(generator.name());
    async {
        match try_classify(generator, query, config, max_tokens).await {
            Ok(classification) => classification,
            Err(e) => {
                events::classification_failed_open(generator.name(), &e.to_string());
                LlmClassification::fail_open()
            }
        }
    }
    .instrument(span)
    .await
}

async fn try_classify<G: ITextGenerator>(
    generator: &G,
    query: &str,
    config: &DecisionConfig,
    max_tokens: u32,
) -> Result<LlmClassification, LlmError> {
    if !generator.is_available() {
        return Err(LlmError::ProviderUnavailable {
            provider: generator.name().to_string(),
        });
    }

    let prompt = build_prompt(query, config.max_prompt_chars);
    events::llm_fallback_engaged(generator.name(), prompt.chars().count());
    let request = GenerationRequest::deterministic(prompt, max_tokens);

    let reply = tokio::time::timeout(config.llm_timeout(), generator.generate(&request))
        .await
        .map_err(|_| LlmError::Timeout {
            timeout_ms: config.llm_timeout_ms,
        })?
        .map_err(|e| LlmError::RequestFailed {
            reason: e.to_string(),
        })?;

    Ok(parse_verdict(&reply)?.into_classification())
}
