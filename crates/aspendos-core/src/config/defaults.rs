// Single source of truth for all default values.

// --- Decision ---
pub const DEFAULT_LLM_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 300;
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 0.75;
pub const DEFAULT_LLM_THRESHOLD: f64 = 0.7;
pub const DEFAULT_LLM_CLASSIFICATION_COST: f64 = 0.0002; // USD per fallback call

// --- Consolidation ---
pub const DEFAULT_DECAY_RATE: f64 = 0.05;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_MAX_AGE_DAYS: f64 = 90.0;
pub const DEFAULT_SOFT_DECAY_AFTER_DAYS: f64 = 7.0;
pub const DEFAULT_HARD_DECAY_SALIENCE: f64 = 0.3;
pub const DEFAULT_MIN_DECAY_FACTOR: f64 = 0.1;

// --- LLM ---
pub const DEFAULT_LLM_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LLM_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_LLM_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 150;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "aspendos.toml";
