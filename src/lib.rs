//! Redraft core library
//!
//! Word-level diffing and rewrite history for AI-assisted writing tools.
//! A rewrite takes the text a user captured, runs it through an AI edit and
//! hands back a transformed version; this crate computes which words the
//! rewrite added and removed, logs transformations with their derived
//! counts, and rolls activity up into usage statistics.
//!
//! The diff engine itself is a pure function over two strings:
//!
//! ```
//! let diff = redraft::compute_word_diff("the quick fox", "the quick brown fox");
//! assert_eq!(diff.added_count, 1);
//! assert_eq!(diff.removed_count, 0);
//! ```

pub mod cache;
pub mod constant;
pub mod diff;
pub mod history;
pub mod metrics;

pub use cache::DiffCache;
pub use diff::{
    ChangeCounts, ChangeType, TextDiffResult, WordDiffEntry, compute_word_diff,
    word_change_counts,
};
pub use history::{
    DayStats, HistoryError, HistoryStore, TransformationLog, TransformationRecord, UsageSummary,
};
