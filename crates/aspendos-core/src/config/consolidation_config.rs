use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ConsolidationOptions;

/// Consolidation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfig {
    /// Soft-decay rate per 30 days of age.
    pub decay_rate: f64,
    /// Jaccard threshold for duplicate detection.
    pub similarity_threshold: f64,
    /// Hard-decay age cutoff (days).
    pub max_age_days: f64,
    /// Soft-decay age cutoff (days).
    pub soft_decay_after_days: f64,
    /// Hard-decay salience ceiling.
    pub hard_decay_salience: f64,
    /// Floor of the soft-decay multiplier.
    pub min_decay_factor: f64,
}

impl ConsolidationConfig {
    pub fn options(&self) -> ConsolidationOptions {
        ConsolidationOptions {
            decay_rate: self.decay_rate,
            similarity_threshold: self.similarity_threshold,
            max_age_days: self.max_age_days,
            soft_decay_after_days: self.soft_decay_after_days,
            hard_decay_salience: self.hard_decay_salience,
            min_decay_factor: self.min_decay_factor,
        }
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            max_age_days: defaults::DEFAULT_MAX_AGE_DAYS,
            soft_decay_after_days: defaults::DEFAULT_SOFT_DECAY_AFTER_DAYS,
            hard_decay_salience: defaults::DEFAULT_HARD_DECAY_SALIENCE,
            min_decay_factor: defaults::DEFAULT_MIN_DECAY_FACTOR,
        }
    }
}
