//! Phase 3: Decay. Salience reduction by age, over the full record list.
//!
//! Independent of Phase 2: a record can be both a removal candidate and
//! decayed.

use aspendos_core::memory::MemoryRecord;
use aspendos_core::models::{ConsolidationOptions, DecayInstruction};
use chrono::{DateTime, Utc};

use crate::algorithms::decay_formula;

/// Decay instructions paired with the input index they apply to.
/// Records without a timestamp are skipped.
pub fn compute_decay(
    memories: &[MemoryRecord],
    options: &ConsolidationOptions,
    now: DateTime<Utc>,
) -> Vec<(usize, DecayInstruction)> {
    memories
        .iter()
        .enumerate()
        .filter_map(|(index, memory)| {
            let age_days = memory.age_days(now)?;
            let (kind, new_salience) = decay_formula::decide(age_days, memory.salience, options)?;
            Some((
                index,
                DecayInstruction {
                    id: memory.id.clone(),
                    kind,
                    age_days,
                    previous_salience: memory.salience,
                    new_salience,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aspendos_core::models::DecayKind;
    use chrono::Duration;

    use super::*;

    #[test]
    fn undated_records_are_skipped() {
        let now = Utc::now();
        let memories = vec![MemoryRecord::new("a", "x").with_salience(0.1)];
        assert!(compute_decay(&memories, &ConsolidationOptions::default(), now).is_empty());
    }

    #[test]
    fn instructions_carry_index_and_values() {
        let now = Utc::now();
        let memories = vec![
            MemoryRecord::new("fresh", "x")
                .with_salience(0.5)
                .with_created_at(now - Duration::days(1)),
            MemoryRecord::new("stale", "y")
                .with_salience(0.1)
                .with_created_at(now - Duration::days(120)),
        ];
        let decays = compute_decay(&memories, &ConsolidationOptions::default(), now);
        assert_eq!(decays.len(), 1);
        let (index, instruction) = &decays[0];
        assert_eq!(*index, 1);
        assert_eq!(instruction.id, "stale");
        assert_eq!(instruction.kind, DecayKind::Hard);
        assert_eq!(instruction.previous_salience, 0.1);
        assert_eq!(instruction.new_salience, 0.0);
        assert!((instruction.age_days - 120.0).abs() < 1e-9);
    }

    #[test]
    fn future_timestamps_count_as_fresh() {
        let now = Utc::now();
        let memories = vec![MemoryRecord::new("a", "x")
            .with_salience(0.1)
            .with_created_at(now + Duration::days(400))];
        assert!(compute_decay(&memories, &ConsolidationOptions::default(), now).is_empty());
    }
}
