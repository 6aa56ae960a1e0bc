use super::types::{ChangeType, WordDiffEntry};

/// Which side of a rewrite a word sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSide {
    Original,
    Transformed,
}

impl DiffSide {
    /// Change type for a word this side has and the common subsequence lacks
    fn off_subsequence(self) -> ChangeType {
        match self {
            DiffSide::Original => ChangeType::Removed,
            DiffSide::Transformed => ChangeType::Added,
        }
    }
}

/// Classify every word of one side against the shared common subsequence.
///
/// Walks the words left to right with a cursor into `lcs`: a word equal to
/// the one under the cursor is unchanged and advances the cursor, any other
/// word is removed or added depending on the side. Each side runs its own
/// walk with its own cursor; the two sides correlate only through consuming
/// the same subsequence in order. Because the subsequence is contained in
/// the words by construction, every subsequence token is matched exactly
/// once and the walk produces exactly `lcs.len()` unchanged entries.
pub fn align(words: &[&str], lcs: &[&str], side: DiffSide) -> Vec<WordDiffEntry> {
    let mut entries = Vec::with_capacity(words.len());
    let mut cursor = 0;

    for (position, &word) in words.iter().enumerate() {
        let change_type = if cursor < lcs.len() && word == lcs[cursor] {
            cursor += 1;
            ChangeType::Unchanged
        } else {
            side.off_subsequence()
        };

        entries.push(WordDiffEntry {
            word: word.to_string(),
            change_type,
            position,
        });
    }

    entries
}
