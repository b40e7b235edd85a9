//! Post-hoc answer check. Proposes at most one retry, never a chain.

use aspendos_core::constants::{
    LONG_RESPONSE_CHARS, MIN_RESPONSE_CHARS, REFLECTION_MIN_WORD_CHARS, RELEVANCE_OVERLAP_RATIO,
};
use aspendos_core::text::word_set;
use aspendos_core::{ReflectionResult, RetryStrategy};
use aspendos_observability::events;

/// Judge whether `response` adequately answers `query`.
///
/// Lengths are measured in characters, not bytes.
pub fn reflect_on_response(query: &str, response: &str, memory_used: bool) -> ReflectionResult {
    let result = evaluate(query, response, memory_used);
    events::reflection_completed(
        result.satisfied,
        result.retry_strategy.as_ref().map(RetryStrategy::as_str),
    );
    result
}

fn evaluate(query: &str, response: &str, memory_used: bool) -> ReflectionResult {
    let response_chars = response.chars().count();
    if response_chars <= MIN_RESPONSE_CHARS {
        return ReflectionResult::retry("too short", RetryStrategy::RequestMoreDetail);
    }

    if !is_relevant(query, response, response_chars) {
        return ReflectionResult::retry(
            "response may not address the query directly",
            RetryStrategy::toggle_memory(memory_used),
        );
    }

    ReflectionResult::satisfied("response is detailed and on topic")
}

/// Enough query words reappear in the response, or the response is long.
fn is_relevant(query: &str, response: &str, response_chars: usize) -> bool {
    if response_chars > LONG_RESPONSE_CHARS {
        return true;
    }
    let query_words = word_set(query, REFLECTION_MIN_WORD_CHARS);
    let response_words = word_set(response, REFLECTION_MIN_WORD_CHARS);
    let overlap = query_words.intersection(&response_words).count();
    overlap as f64 >= RELEVANCE_OVERLAP_RATIO * query_words.len() as f64
}
