//! Phase 1: Grouping. Partition records by sector.

use std::collections::BTreeMap;

use aspendos_core::memory::{MemoryRecord, MemorySector};

/// Input indices per sector, each group in input order.
///
/// Records without a sector were already decoded as semantic.
pub fn group_by_sector(memories: &[MemoryRecord]) -> BTreeMap<MemorySector, Vec<usize>> {
    let mut groups: BTreeMap<MemorySector, Vec<usize>> = BTreeMap::new();
    for (index, memory) in memories.iter().enumerate() {
        groups.entry(memory.sector).or_default().push(index);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_preserve_input_order() {
        let memories = vec![
            MemoryRecord::new("a", "x").with_sector(MemorySector::Episodic),
            MemoryRecord::new("b", "y"),
            MemoryRecord::new("c", "z").with_sector(MemorySector::Episodic),
        ];
        let groups = group_by_sector(&memories);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&MemorySector::Episodic], vec![0, 2]);
        assert_eq!(groups[&MemorySector::Semantic], vec![1]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_sector(&[]).is_empty());
    }
}
