use serde::{Deserialize, Serialize};

/// How a single word changed between the original and the transformed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Unchanged,
    Added,
    Removed,
}

/// One classified word of either side of a diff.
///
/// `position` is the zero-based index of the word within its own side's
/// word sequence, not within the common subsequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiffEntry {
    pub word: String,
    pub change_type: ChangeType,
    pub position: usize,
}

/// Complete word-level diff between an original and a transformed text.
///
/// `original_diff` covers every word of the original text and only marks
/// words as unchanged or removed; `transformed_diff` covers every word of
/// the transformed text and only marks words as unchanged or added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiffResult {
    pub original_diff: Vec<WordDiffEntry>,
    pub transformed_diff: Vec<WordDiffEntry>,
    pub added_count: usize,
    pub removed_count: usize,
}

impl TextDiffResult {
    /// Check whether the rewrite changed any word at all
    pub fn is_unchanged(&self) -> bool {
        self.added_count == 0 && self.removed_count == 0
    }
}
