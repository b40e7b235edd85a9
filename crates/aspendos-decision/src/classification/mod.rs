//! Query classification: ordered pattern rules with a model fallback for
//! queries no rule recognizes.

pub mod llm_fallback;
pub mod rules;

pub use llm_fallback::{build_prompt, classify_with_llm, parse_verdict, LlmVerdict};
pub use rules::{classify_query, classify_query_detailed, Classification};
