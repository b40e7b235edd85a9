// Fixed behavioral constants. Tunable values live in `config::defaults`.

/// Maximum number of sectors a decision may name.
pub const MAX_SECTORS: usize = 3;

/// Confidence of a decision routed through the static matrix to "use".
pub const MATRIX_USE_CONFIDENCE: f64 = 0.9;
/// Confidence of a decision routed through the static matrix to "skip".
pub const MATRIX_SKIP_CONFIDENCE: f64 = 1.0;

/// Confidence when the model named a concrete query type.
pub const LLM_RECOGNIZED_CONFIDENCE: f64 = 0.85;
/// Confidence when the model answered but the type was unusable.
pub const LLM_UNRECOGNIZED_CONFIDENCE: f64 = 0.5;
/// Confidence of the fail-open classification.
pub const FAIL_OPEN_CONFIDENCE: f64 = 0.4;

/// Responses at or below this many characters are always rejected.
pub const MIN_RESPONSE_CHARS: usize = 50;
/// Responses above this many characters are treated as relevant.
pub const LONG_RESPONSE_CHARS: usize = 500;
/// Fraction of query words that must reappear in the response.
pub const RELEVANCE_OVERLAP_RATIO: f64 = 0.3;
/// Reflection only counts words strictly longer than this.
pub const REFLECTION_MIN_WORD_CHARS: usize = 3;

/// Jaccard tokenization only counts words strictly longer than this.
pub const SIMILARITY_MIN_TOKEN_CHARS: usize = 2;

/// Seconds per day, for age computations.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
