//! DecisionAgent: classify → matrix → sectors, one decision per query.

use aspendos_core::config::{defaults, AspendosConfig, DecisionConfig};
use aspendos_core::constants::{MATRIX_SKIP_CONFIDENCE, MATRIX_USE_CONFIDENCE};
use aspendos_core::query::QueryType;
use aspendos_core::traits::ITextGenerator;
use aspendos_core::{LlmClassification, MemoryDecision};
use aspendos_observability::events;
use tracing::Instrument;

use crate::classification::{classify_query_detailed, classify_with_llm};
use crate::matrix::{DecisionMatrix, MemoryPolicy};
use crate::sectors::select_sectors;

/// Per-query memory routing.
///
/// The text generator is only consulted for queries the matrix defers, so at
/// most one external call happens per decision.
pub struct DecisionAgent<G: ITextGenerator> {
    generator: G,
    config: DecisionConfig,
    matrix: DecisionMatrix,
    max_tokens: u32,
}

impl<G: ITextGenerator> DecisionAgent<G> {
    pub fn new(generator: G, config: DecisionConfig) -> Self {
        Self {
            generator,
            config,
            matrix: DecisionMatrix::standard(),
            max_tokens: defaults::DEFAULT_LLM_MAX_TOKENS,
        }
    }

    /// Build from the full service config.
    pub fn from_config(generator: G, config: &AspendosConfig) -> Self {
        Self::new(generator, config.decision.clone()).with_max_tokens(config.llm.max_tokens)
    }

    pub fn with_matrix(mut self, matrix: DecisionMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Decide whether and how to use memory for `query`.
    ///
    /// When `query_type` is given the classifier is skipped. Never fails:
    /// model problems degrade to the fail-open classification.
    pub async fn decide_memory_usage(
        &self,
        query: &str,
        query_type: Option<QueryType>,
    ) -> MemoryDecision {
        let span = aspendos_observability::decision_span!(query.chars().count());
        async {
            let decision = self.route(query, query_type).await;
            let sectors: Vec<&str> = decision.sectors().iter().map(|s| s.as_str()).collect();
            events::decision_made(
                decision.query_type().as_str(),
                decision.use_memory(),
                &sectors,
                decision.confidence(),
            );
            decision
        }
        .instrument(span)
        .await
    }

    async fn route(&self, query: &str, query_type: Option<QueryType>) -> MemoryDecision {
        let (query_type, origin) = match query_type {
            Some(t) => (t, "query type supplied by caller".to_string()),
            None => {
                let classification = classify_query_detailed(query);
                (classification.query_type, classification.reasoning())
            }
        };

        match self.matrix.policy(query_type) {
            MemoryPolicy::Skip => MemoryDecision::skip(
                query_type,
                format!("{origin}; {query_type} does not need personal context"),
                MATRIX_SKIP_CONFIDENCE,
            ),
            MemoryPolicy::Use => MemoryDecision::new(
                true,
                format!("{origin}; {query_type} benefits from personal context"),
                select_sectors(query, query_type),
                self.config.memory_threshold,
                0.0,
                query_type,
                MATRIX_USE_CONFIDENCE,
            ),
            MemoryPolicy::Defer => {
                let classification =
                    classify_with_llm(&self.generator, query, &self.config, self.max_tokens)
                        .await;
                self.from_model(&origin, classification)
            }
        }
    }

    fn from_model(&self, origin: &str, classification: LlmClassification) -> MemoryDecision {
        let reasoning = if classification == LlmClassification::fail_open() {
            format!("{origin}; model classification unavailable, failing open")
        } else {
            format!(
                "{origin}; model classified as {} (confidence {:.2})",
                classification.query_type, classification.confidence
            )
        };

        MemoryDecision::new(
            classification.use_memory,
            reasoning,
            classification.sectors,
            self.config.llm_threshold,
            self.config.llm_classification_cost,
            classification.query_type,
            classification.confidence,
        )
    }
}
