//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed memory decision.
pub fn decision_made(query_type: &str, use_memory: bool, sectors: &[&str], confidence: f64) {
    tracing::info!(
        event = "decision_made",
        query_type = %query_type,
        use_memory = use_memory,
        sectors = ?sectors,
        confidence = confidence,
        "memory decision made"
    );
}

/// Log that a query fell through to the model classifier.
pub fn llm_fallback_engaged(provider: &str, prompt_chars: usize) {
    tracing::debug!(
        event = "llm_fallback_engaged",
        provider = %provider,
        prompt_chars = prompt_chars,
        "query unmatched by rules, asking model"
    );
}

/// Log a degraded classification that failed open.
pub fn classification_failed_open(provider: &str, failure: &str) {
    tracing::warn!(
        event = "classification_failed_open",
        provider = %provider,
        failure = %failure,
        fallback = "unknown/semantic+procedural",
        "model classification failed, using fail-open default"
    );
}

/// Log a reflection outcome.
pub fn reflection_completed(satisfied: bool, retry_strategy: Option<&str>) {
    tracing::info!(
        event = "reflection_completed",
        satisfied = satisfied,
        retry_strategy = ?retry_strategy,
        "response reflection completed"
    );
}

/// Log a single decay instruction.
pub fn memory_decayed(memory_id: &str, kind: &str, previous: f64, new: f64) {
    tracing::debug!(
        event = "memory_decayed",
        memory_id = %memory_id,
        kind = %kind,
        previous = previous,
        new = new,
        "memory decay planned"
    );
}

/// Log a completed consolidation plan.
pub fn consolidation_planned(merged: usize, decayed: usize, preserved: usize) {
    tracing::info!(
        event = "consolidation_planned",
        merged = merged,
        decayed = decayed,
        preserved = preserved,
        "consolidation plan computed"
    );
}
