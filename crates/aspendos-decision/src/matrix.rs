//! QueryType → retrieval policy matrix.
//!
//! Default policies are hardcoded; individual entries can be overridden by
//! the owning service.

use std::collections::BTreeMap;
use std::fmt;

use aspendos_core::query::QueryType;
use serde::{Deserialize, Serialize};

/// Three-way retrieval policy for a query category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPolicy {
    /// Always retrieve memory.
    Use,
    /// Never retrieve memory.
    Skip,
    /// Let the model decide.
    Defer,
}

impl MemoryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Use => "use",
            Self::Skip => "skip",
            Self::Defer => "defer",
        }
    }
}

impl fmt::Display for MemoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in policy for each query type.
pub fn default_policy(query_type: QueryType) -> MemoryPolicy {
    match query_type {
        QueryType::GeneralKnowledge => MemoryPolicy::Skip,
        QueryType::Unknown => MemoryPolicy::Defer,
        QueryType::TechnicalAdvice
        | QueryType::Debugging
        | QueryType::PersonalReflection
        | QueryType::CodeReview
        | QueryType::Learning
        | QueryType::Creative => MemoryPolicy::Use,
    }
}

/// Immutable lookup from query type to policy. Every type has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionMatrix {
    policies: BTreeMap<QueryType, MemoryPolicy>,
}

impl DecisionMatrix {
    /// Matrix with the built-in policies.
    pub fn standard() -> Self {
        let policies = QueryType::ALL
            .into_iter()
            .map(|t| (t, default_policy(t)))
            .collect();
        Self { policies }
    }

    /// Replace the policy for one query type.
    pub fn with_override(mut self, query_type: QueryType, policy: MemoryPolicy) -> Self {
        self.policies.insert(query_type, policy);
        self
    }

    /// Policy for a query type.
    pub fn policy(&self, query_type: QueryType) -> MemoryPolicy {
        self.policies
            .get(&query_type)
            .copied()
            .unwrap_or_else(|| default_policy(query_type))
    }

    /// Iterate entries in query-type order.
    pub fn entries(&self) -> impl Iterator<Item = (QueryType, MemoryPolicy)> + '_ {
        self.policies.iter().map(|(t, p)| (*t, *p))
    }
}

impl Default for DecisionMatrix {
    fn default() -> Self {
        Self::standard()
    }
}
