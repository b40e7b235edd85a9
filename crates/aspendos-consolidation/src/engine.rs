//! ConsolidationEngine: holds the options and plans one or many users.

use aspendos_core::config::ConsolidationConfig;
use aspendos_core::memory::MemoryRecord;
use aspendos_core::models::{ConsolidationOptions, ConsolidationPlan};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::info;

use crate::pipeline;

/// Consolidation planner.
///
/// Stateless apart from its options, so a single engine can plan any number
/// of users concurrently.
#[derive(Debug, Clone, Default)]
pub struct ConsolidationEngine {
    options: ConsolidationOptions,
}

impl ConsolidationEngine {
    pub fn new(options: ConsolidationOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &ConsolidationConfig) -> Self {
        Self::new(config.options())
    }

    pub fn options(&self) -> &ConsolidationOptions {
        &self.options
    }

    /// Plan one user's memory set as of now.
    pub fn plan(&self, memories: &[MemoryRecord]) -> ConsolidationPlan {
        pipeline::consolidate_memories(memories, &self.options)
    }

    /// Plan one user's memory set with an explicit clock.
    pub fn plan_at(&self, memories: &[MemoryRecord], now: DateTime<Utc>) -> ConsolidationPlan {
        pipeline::consolidate_memories_at(memories, &self.options, now)
    }

    /// Plan many users in parallel. Output order matches input order.
    pub fn plan_batch(
        &self,
        users: &[(String, Vec<MemoryRecord>)],
    ) -> Vec<(String, ConsolidationPlan)> {
        self.plan_batch_at(users, Utc::now())
    }

    /// Plan many users in parallel against one shared clock.
    pub fn plan_batch_at(
        &self,
        users: &[(String, Vec<MemoryRecord>)],
        now: DateTime<Utc>,
    ) -> Vec<(String, ConsolidationPlan)> {
        let plans: Vec<(String, ConsolidationPlan)> = users
            .par_iter()
            .map(|(user_id, memories)| (user_id.clone(), self.plan_at(memories, now)))
            .collect();

        let (merged, decayed) = plans.iter().fold((0, 0), |(m, d), (_, plan)| {
            (m + plan.result.merged, d + plan.result.decayed)
        });
        info!(users = plans.len(), merged, decayed, "batch consolidation planned");
        plans
    }
}
