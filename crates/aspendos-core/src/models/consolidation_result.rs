use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Tunables for one consolidation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsolidationOptions {
    /// Soft-decay rate per 30 days of age.
    pub decay_rate: f64,
    /// Jaccard similarity at or above which two memories are duplicates.
    pub similarity_threshold: f64,
    /// Age beyond which low-salience memories are hard-decayed.
    pub max_age_days: f64,
    /// Age beyond which soft decay applies.
    pub soft_decay_after_days: f64,
    /// Hard decay only applies below this salience.
    pub hard_decay_salience: f64,
    /// Floor of the soft-decay multiplier.
    pub min_decay_factor: f64,
}

impl Default for ConsolidationOptions {
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

/// Instruction to fold `remove` into `keep`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeInstruction {
    pub keep: String,
    pub remove: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayKind {
    /// Old and unimportant: salience forced to zero.
    Hard,
    /// Proportional reduction by age.
    Soft,
}

impl DecayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

/// Instruction to lower one record's salience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayInstruction {
    pub id: String,
    pub kind: DecayKind,
    pub age_days: f64,
    pub previous_salience: f64,
    pub new_salience: f64,
}

/// Summary counts of a consolidation plan.
///
/// `merged` counts duplicate *pairs*. The remaining fields count records:
/// `removal_candidates` is the number of distinct records named as `remove`
/// by any pair, `decayed` the number of records with a decay instruction,
/// and `preserved` the records touched by neither. A record that is both a
/// removal candidate and decayed is excluded from `preserved` once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationResult {
    pub merged: usize,
    pub removal_candidates: usize,
    pub decayed: usize,
    pub preserved: usize,
}

/// The full output of a consolidation run. The caller applies it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationPlan {
    pub result: ConsolidationResult,
    pub merges: Vec<MergeInstruction>,
    pub decays: Vec<DecayInstruction>,
}

impl ConsolidationPlan {
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty() && self.decays.is_empty()
    }
}
