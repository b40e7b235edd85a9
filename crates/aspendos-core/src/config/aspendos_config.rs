//! Top-level Aspendos configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ConsolidationConfig, DecisionConfig, LlmConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ASPENDOS_*`)
/// 2. Project config (`aspendos.toml` in the service root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AspendosConfig {
    pub decision: DecisionConfig,
    pub consolidation: ConsolidationConfig,
    pub llm: LlmConfig,
    pub observability: ObservabilityConfig,
}

impl AspendosConfig {
    /// Load configuration with layered resolution, reading overrides from the
    /// process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ASPENDOS_*` overrides. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env("ASPENDOS_LLM_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.decision.llm_timeout_ms = v;
        }
        if let Some(v) = env("ASPENDOS_MAX_PROMPT_CHARS").and_then(|v| v.parse::<usize>().ok()) {
            self.decision.max_prompt_chars = v;
        }
        if let Some(v) = env("ASPENDOS_DECAY_RATE").and_then(|v| v.parse::<f64>().ok()) {
            self.consolidation.decay_rate = v;
        }
        if let Some(v) = env("ASPENDOS_SIMILARITY_THRESHOLD").and_then(|v| v.parse::<f64>().ok())
        {
            self.consolidation.similarity_threshold = v;
        }
        if let Some(v) = env("ASPENDOS_MAX_AGE_DAYS").and_then(|v| v.parse::<f64>().ok()) {
            self.consolidation.max_age_days = v;
        }
        if let Some(v) = env("ASPENDOS_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Some(v) = env("ASPENDOS_LLM_MODEL") {
            self.llm.model = v;
        }
        if let Some(v) = env("ASPENDOS_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("decision.memory_threshold", self.decision.memory_threshold),
            ("decision.llm_threshold", self.decision.llm_threshold),
            ("consolidation.decay_rate", self.consolidation.decay_rate),
            (
                "consolidation.similarity_threshold",
                self.consolidation.similarity_threshold,
            ),
            (
                "consolidation.hard_decay_salience",
                self.consolidation.hard_decay_salience,
            ),
            (
                "consolidation.min_decay_factor",
                self.consolidation.min_decay_factor,
            ),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        if self.decision.llm_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.llm_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.decision.max_prompt_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.max_prompt_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let cost = self.decision.llm_classification_cost;
        if cost.is_nan() || cost < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.llm_classification_cost".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if self.consolidation.max_age_days.is_nan() || self.consolidation.max_age_days <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.max_age_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.consolidation.soft_decay_after_days.is_nan()
            || self.consolidation.soft_decay_after_days < 0.0
        {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.soft_decay_after_days".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}
