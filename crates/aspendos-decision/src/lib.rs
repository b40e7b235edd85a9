//! # aspendos-decision
//!
//! Per-query memory routing. Given the user's message, decide whether to
//! retrieve personal memory, from which sectors, and at what threshold.
//! After generation, check the answer and propose at most one retry.
//!
//! ## Architecture
//!
//! ```text
//! DecisionAgent<G: ITextGenerator>
//! ├── Classification
//! │   ├── Rules (ordered regex table, first match wins, pronoun override)
//! │   └── LlmFallback (bounded prompt, schema validation, fail-open)
//! ├── DecisionMatrix (QueryType → Use / Skip / Defer)
//! ├── SectorSelector (base list + temporal/affect/process heuristics)
//! └── Reflection (length + lexical overlap, memory toggle)
//! ```

pub mod agent;
pub mod classification;
pub mod matrix;
pub mod reflection;
pub mod sectors;

pub use agent::DecisionAgent;
pub use classification::{classify_query, classify_with_llm, Classification};
pub use matrix::{DecisionMatrix, MemoryPolicy};
pub use reflection::reflect_on_response;
pub use sectors::select_sectors;
