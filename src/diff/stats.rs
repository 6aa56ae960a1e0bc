use super::types::{ChangeType, WordDiffEntry};

/// Added/removed word totals for one rewrite
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangeCounts {
    pub added_count: usize,
    pub removed_count: usize,
}

/// Tally removals on the original side and additions on the transformed side
pub fn tally(
    original_diff: &[WordDiffEntry],
    transformed_diff: &[WordDiffEntry],
) -> ChangeCounts {
    ChangeCounts {
        added_count: count(transformed_diff, ChangeType::Added),
        removed_count: count(original_diff, ChangeType::Removed),
    }
}

fn count(entries: &[WordDiffEntry], change_type: ChangeType) -> usize {
    entries
        .iter()
        .filter(|e| e.change_type == change_type)
        .count()
}
