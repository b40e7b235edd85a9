use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SECTORS;

/// The 5 kinds of stored memory. Retrieval and consolidation both partition
/// a user's memories along this axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MemorySector {
    /// Specific events and interactions.
    Episodic,
    /// Facts and general knowledge about the user. Records without a sector land here.
    #[default]
    Semantic,
    /// How the user does things: workflows, processes, habits.
    Procedural,
    /// Feelings and affect attached to experiences.
    Emotional,
    /// The user's own conclusions and insights.
    Reflective,
}

impl MemorySector {
    pub const COUNT: usize = 5;

    pub const ALL: [MemorySector; 5] = [
        Self::Episodic,
        Self::Semantic,
        Self::Procedural,
        Self::Emotional,
        Self::Reflective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Episodic => "episodic",
            Self::Semantic => "semantic",
            Self::Procedural => "procedural",
            Self::Emotional => "emotional",
            Self::Reflective => "reflective",
        }
    }

    /// Case-insensitive parse. `None` for anything outside the enum.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == normalized)
    }
}

/// Deduplicate in first-seen order and cap at [`MAX_SECTORS`].
pub fn cap_unique(sectors: impl IntoIterator<Item = MemorySector>) -> Vec<MemorySector> {
    let mut unique = Vec::with_capacity(MAX_SECTORS);
    for sector in sectors {
        if unique.len() == MAX_SECTORS {
            break;
        }
        if !unique.contains(&sector) {
            unique.push(sector);
        }
    }
    unique
}

impl fmt::Display for MemorySector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemorySector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| format!("unknown memory sector: {s}"))
    }
}
