use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::sector::MemorySector;
use crate::constants::SECONDS_PER_DAY;

/// A snapshot of one stored memory, as supplied by the memory store.
///
/// The engine only reads these. Missing optional fields decode to their
/// defaults: sector → semantic, salience → 0, created_at → none. Explicit
/// nulls are treated the same as missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "sector_or_default")]
    pub sector: MemorySector,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salience: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl MemoryRecord {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sector: MemorySector::default(),
            salience: 0.0,
            created_at: None,
        }
    }

    pub fn with_sector(mut self, sector: MemorySector) -> Self {
        self.sector = sector;
        self
    }

    pub fn with_salience(mut self, salience: f64) -> Self {
        self.salience = salience;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Fractional age in days at `now`. `None` if the record has no timestamp.
    /// Timestamps in the future yield an age of zero.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<f64> {
        self.created_at
            .map(|created| (now - created).num_seconds().max(0) as f64 / SECONDS_PER_DAY)
    }
}

/// Null, missing, or unrecognized sector strings all fall back to semantic.
fn sector_or_default<'de, D>(deserializer: D) -> Result<MemorySector, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(MemorySector::parse_lenient)
        .unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn missing_fields_take_defaults() {
        let record: MemoryRecord = serde_json::from_str(r#"{"id":"m1"}"#).unwrap();
        assert_eq!(record.sector, MemorySector::Semantic);
        assert_eq!(record.salience, 0.0);
        assert!(record.created_at.is_none());
        assert!(record.content.is_empty());
    }

    #[test]
    fn null_fields_take_defaults() {
        let json = r#"{"id":"m1","content":null,"sector":null,"salience":null,"createdAt":null}"#;
        let record: MemoryRecord = serde_json::from_str(json).unwrap();
        assert!(record.content.is_empty());
        assert_eq!(record.sector, MemorySector::Semantic);
        assert_eq!(record.salience, 0.0);
        assert!(record.created_at.is_none());

        let batch: Vec<MemoryRecord> = serde_json::from_str(
            r#"[{"id":"a","content":"x","salience":null},{"id":"b","content":null,"salience":0.4}]"#,
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].salience, 0.0);
        assert_eq!(batch[1].salience, 0.4);
    }

    #[test]
    fn unrecognized_sector_falls_back_to_semantic() {
        let record: MemoryRecord =
            serde_json::from_str(r#"{"id":"m1","content":"x","sector":"dreams"}"#).unwrap();
        assert_eq!(record.sector, MemorySector::Semantic);

        let record: MemoryRecord =
            serde_json::from_str(r#"{"id":"m2","sector":null}"#).unwrap();
        assert_eq!(record.sector, MemorySector::Semantic);
    }

    #[test]
    fn camel_case_fields_decode() {
        let json = r#"{"id":"m1","content":"likes rust","sector":"Procedural","salience":0.7,"createdAt":"2025-01-01T00:00:00Z"}"#;
        let record: MemoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sector, MemorySector::Procedural);
        assert_eq!(record.salience, 0.7);
        assert!(record.created_at.is_some());
    }

    #[test]
    fn age_days_is_fractional_and_never_negative() {
        let now = Utc::now();
        let record = MemoryRecord::new("m1", "x").with_created_at(now - Duration::hours(36));
        let age = record.age_days(now).unwrap();
        assert!((age - 1.5).abs() < 1e-6);

        let future = MemoryRecord::new("m2", "x").with_created_at(now + Duration::days(2));
        assert_eq!(future.age_days(now), Some(0.0));

        assert_eq!(MemoryRecord::new("m3", "x").age_days(now), None);
    }
}
