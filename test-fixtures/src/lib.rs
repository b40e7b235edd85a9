//! Test fixture loader for Aspendos golden datasets and benchmark inputs,
//! plus small builders shared by the integration tests of every crate.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use aspendos_core::errors::{AspendosResult, LlmError};
use aspendos_core::memory::{MemoryRecord, MemorySector};
use aspendos_core::models::ConsolidationOptions;
use aspendos_core::traits::{GenerationRequest, ITextGenerator};
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

// --- Golden dataset shapes ---

/// One labelled query from `golden/classification/queries.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationCase {
    pub query: String,
    pub expected: String,
}

/// One canned model reply from `golden/llm/replies.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmReplyCase {
    pub name: String,
    pub reply: String,
    pub expected_type: String,
    pub expected_confidence: f64,
    pub expected_use_memory: bool,
    pub expected_sectors: Vec<String>,
}

/// A consolidation scenario from `golden/consolidation/*.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationCase {
    pub description: String,
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub options: ConsolidationOptions,
    pub memories: Vec<MemoryRecord>,
    pub expected: ExpectedConsolidation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedConsolidation {
    pub merged: usize,
    pub removal_candidates: usize,
    pub decayed: usize,
    pub preserved: usize,
    #[serde(default)]
    pub removed_ids: Vec<String>,
}

// --- Builders ---

/// Fixed reference instant so age arithmetic in tests is exact.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("reference timestamp is ambiguous"))
}

/// A record created `age_days` before `now`.
pub fn record(
    id: &str,
    content: &str,
    sector: MemorySector,
    salience: f64,
    age_days: i64,
    now: DateTime<Utc>,
) -> MemoryRecord {
    MemoryRecord::new(id, content)
        .with_sector(sector)
        .with_salience(salience)
        .with_created_at(now - chrono::Duration::days(age_days))
}

/// A semantic record with no timestamp.
pub fn undated(id: &str, content: &str, salience: f64) -> MemoryRecord {
    MemoryRecord::new(id, content).with_salience(salience)
}

/// `count` records spread over every sector with overlapping vocabulary,
/// for benchmarks.
pub fn synthetic_memories(count: usize, now: DateTime<Utc>) -> Vec<MemoryRecord> {
    const TOPICS: [&str; 8] = [
        "prefers rust for backend services and tokio for async work",
        "deploys the side project on a small vps with docker compose",
        "felt stressed about the quarterly review at work",
        "reads about distributed systems before bed",
        "uses a step by step checklist when releasing new versions",
        "learned that sqlite handles concurrent readers well",
        "enjoys writing short poems about autumn evenings",
        "keeps a weekly journal about habits and progress",
    ];
    (0..count)
        .map(|i| {
            let sector = MemorySector::ALL[i % MemorySector::COUNT];
            let topic = TOPICS[i % TOPICS.len()];
            let content = format!("{topic} variant {}", i / TOPICS.len());
            let salience = ((i * 37) % 100) as f64 / 100.0;
            record(
                &format!("mem-{i:05}"),
                &content,
                sector,
                salience,
                (i % 200) as i64,
                now,
            )
        })
        .collect()
}

// --- Scripted text generator ---

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Fail(String),
    Hang(Duration, String),
}

/// An [`ITextGenerator`] with a fixed behaviour, recording how often it ran.
#[derive(Debug)]
pub struct ScriptedGenerator {
    script: Script,
    available: bool,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    /// Always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(reply.into()))
    }

    /// Always fails with a request error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(reason.into()))
    }

    /// Answers with `reply`, but only after `delay`.
    pub fn hanging(delay: Duration, reply: impl Into<String>) -> Self {
        Self::with_script(Script::Hang(delay, reply.into()))
    }

    /// Reports itself unavailable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::failing("unavailable")
        }
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            available: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ITextGenerator for ScriptedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> AspendosResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(reason) => Err(LlmError::RequestFailed {
                reason: reason.clone(),
            }
            .into()),
            Script::Hang(delay, reply) => {
                tokio::time::sleep(*delay).await;
                Ok(reply.clone())
            }
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
