use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 8 query categories a user message can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    GeneralKnowledge,
    TechnicalAdvice,
    Debugging,
    PersonalReflection,
    CodeReview,
    Learning,
    Creative,
    Unknown,
}

impl QueryType {
    /// Total number of query types.
    pub const COUNT: usize = 8;

    /// All variants for iteration.
    pub const ALL: [QueryType; 8] = [
        Self::GeneralKnowledge,
        Self::TechnicalAdvice,
        Self::Debugging,
        Self::PersonalReflection,
        Self::CodeReview,
        Self::Learning,
        Self::Creative,
        Self::Unknown,
    ];

    /// Wire name, as used in model prompts and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralKnowledge => "general_knowledge",
            Self::TechnicalAdvice => "technical_advice",
            Self::Debugging => "debugging",
            Self::PersonalReflection => "personal_reflection",
            Self::CodeReview => "code_review",
            Self::Learning => "learning",
            Self::Creative => "creative",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a type name leniently: case, surrounding whitespace, hyphens and
    /// spaces are normalized. Returns `None` for anything outside the enum.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| format!("unknown query type: {s}"))
    }
}
