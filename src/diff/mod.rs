//! Word-level text diffing.
//!
//! A rewrite is rendered from both directions: the original text with its
//! removed words marked, and the transformed text with its added words
//! marked. Both renderings are aligned against one shared
//! longest-common-subsequence computation, so the two views can never
//! disagree about which words survived the rewrite.
//!
//! The whole pipeline is pure: no I/O, no shared state, total over every
//! pair of strings. Callers that render the same pair repeatedly can keep
//! a [`crate::cache::DiffCache`] next to their view.

mod align;
mod lcs;
mod stats;
mod tokenize;
mod types;

pub use stats::ChangeCounts;
pub use types::{ChangeType, TextDiffResult, WordDiffEntry};

use align::DiffSide;

/// Compute the word-level diff between an original and a transformed text.
///
/// Tokenizes both sides on whitespace, computes their longest common
/// subsequence and classifies every word of each side as unchanged, added
/// or removed. Never fails: empty inputs, identical inputs and fully
/// disjoint inputs all produce a well-formed result.
pub fn compute_word_diff(original: &str, transformed: &str) -> TextDiffResult {
    let original_words = tokenize::tokenize(original);
    let transformed_words = tokenize::tokenize(transformed);

    let lcs = lcs::longest_common_subsequence(&original_words, &transformed_words);

    let original_diff = align::align(&original_words, &lcs, DiffSide::Original);
    let transformed_diff = align::align(&transformed_words, &lcs, DiffSide::Transformed);

    let counts = stats::tally(&original_diff, &transformed_diff);

    TextDiffResult {
        original_diff,
        transformed_diff,
        added_count: counts.added_count,
        removed_count: counts.removed_count,
    }
}

/// Added/removed totals without building the per-word entries.
///
/// Every word outside the common subsequence is an addition on the
/// transformed side or a removal on the original side, so the counts only
/// need the subsequence length. Runs the rolling-row computation, which
/// keeps memory proportional to the shorter side; useful for dashboard
/// rollups over long documents where nothing gets highlighted.
pub fn word_change_counts(original: &str, transformed: &str) -> ChangeCounts {
    let original_words = tokenize::tokenize(original);
    let transformed_words = tokenize::tokenize(transformed);

    let common = lcs::common_len(&original_words, &transformed_words);

    ChangeCounts {
        added_count: transformed_words.len() - common,
        removed_count: original_words.len() - common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(entries: &[WordDiffEntry], change_type: ChangeType) -> usize {
        entries
            .iter()
            .filter(|e| e.change_type == change_type)
            .count()
    }

    fn assert_well_formed(diff: &TextDiffResult, original: &str, transformed: &str) {
        assert_eq!(
            diff.original_diff.len(),
            original.split_whitespace().count()
        );
        assert_eq!(
            diff.transformed_diff.len(),
            transformed.split_whitespace().count()
        );
        assert_eq!(diff.added_count, count(&diff.transformed_diff, ChangeType::Added));
        assert_eq!(diff.removed_count, count(&diff.original_diff, ChangeType::Removed));
        assert_eq!(count(&diff.original_diff, ChangeType::Added), 0);
        assert_eq!(count(&diff.transformed_diff, ChangeType::Removed), 0);
        assert_eq!(
            count(&diff.original_diff, ChangeType::Unchanged),
            count(&diff.transformed_diff, ChangeType::Unchanged)
        );
        for (position, entry) in diff.original_diff.iter().enumerate() {
            assert_eq!(entry.position, position);
        }
        for (position, entry) in diff.transformed_diff.iter().enumerate() {
            assert_eq!(entry.position, position);
        }
    }

    #[test]
    fn identical_texts_change_nothing() {
        let diff = compute_word_diff("the quick fox", "the quick fox");

        assert_well_formed(&diff, "the quick fox", "the quick fox");
        assert_eq!(diff.added_count, 0);
        assert_eq!(diff.removed_count, 0);
        assert!(diff.is_unchanged());
        assert!(
            diff.original_diff
                .iter()
                .chain(diff.transformed_diff.iter())
                .all(|e| e.change_type == ChangeType::Unchanged)
        );
    }

    #[test]
    fn inserted_word_is_the_only_addition() {
        let diff = compute_word_diff("the quick fox", "the quick brown fox");

        assert_well_formed(&diff, "the quick fox", "the quick brown fox");
        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 0);

        let expected: Vec<(&str, ChangeType)> = vec![
            ("the", ChangeType::Unchanged),
            ("quick", ChangeType::Unchanged),
            ("brown", ChangeType::Added),
            ("fox", ChangeType::Unchanged),
        ];
        let actual: Vec<(&str, ChangeType)> = diff
            .transformed_diff
            .iter()
            .map(|e| (e.word.as_str(), e.change_type))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn disjoint_texts_replace_every_word() {
        let diff = compute_word_diff("a b c", "x y z");

        assert_well_formed(&diff, "a b c", "x y z");
        assert_eq!(diff.added_count, 3);
        assert_eq!(diff.removed_count, 3);
        assert!(
            diff.original_diff
                .iter()
                .all(|e| e.change_type == ChangeType::Removed)
        );
        assert!(
            diff.transformed_diff
                .iter()
                .all(|e| e.change_type == ChangeType::Added)
        );
    }

    #[test]
    fn empty_original_makes_everything_added() {
        let diff = compute_word_diff("", "hello world");

        assert_well_formed(&diff, "", "hello world");
        assert!(diff.original_diff.is_empty());
        assert_eq!(diff.added_count, 2);
        assert_eq!(diff.removed_count, 0);
    }

    #[test]
    fn blank_inputs_produce_an_empty_diff() {
        let diff = compute_word_diff("  ", "");

        assert!(diff.original_diff.is_empty());
        assert!(diff.transformed_diff.is_empty());
        assert_eq!(diff.added_count, 0);
        assert_eq!(diff.removed_count, 0);
    }

    #[test]
    fn contraction_rewrite_counts_match() {
        let diff = compute_word_diff("I am a very tall guy.", "I'm very tall.");

        assert_well_formed(&diff, "I am a very tall guy.", "I'm very tall.");

        // Punctuation stays attached, so "tall" and "tall." are different
        // words and only "very" survives
        assert_eq!(diff.added_count, 2);
        assert_eq!(diff.removed_count, 5);

        let added: Vec<&str> = diff
            .transformed_diff
            .iter()
            .filter(|e| e.change_type == ChangeType::Added)
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(added, vec!["I'm", "tall."]);

        let removed: Vec<&str> = diff
            .original_diff
            .iter()
            .filter(|e| e.change_type == ChangeType::Removed)
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(removed, vec!["I", "am", "a", "tall", "guy."]);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let original = "the meeting is at noon tomorrow";
        let transformed = "the meeting starts at noon";

        let first = compute_word_diff(original, transformed);
        let second = compute_word_diff(original, transformed);
        assert_eq!(first, second);
    }

    #[test]
    fn swapped_words_resolve_to_the_stable_alternative() {
        // "x y" -> "y x" has two equally long common subsequences; the
        // up-before-left backtracking keeps "x"
        let diff = compute_word_diff("x y", "y x");

        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 1);
        assert_eq!(diff.original_diff[0].change_type, ChangeType::Unchanged);
        assert_eq!(diff.original_diff[1].change_type, ChangeType::Removed);
        assert_eq!(diff.transformed_diff[0].change_type, ChangeType::Added);
        assert_eq!(diff.transformed_diff[1].change_type, ChangeType::Unchanged);
    }

    #[test]
    fn counts_only_path_agrees_with_full_diff() {
        let cases = [
            ("the quick fox", "the quick brown fox"),
            ("a b c", "x y z"),
            ("", "hello world"),
            ("  ", ""),
            ("I am a very tall guy.", "I'm very tall."),
            ("x y", "y x"),
            ("same same", "same same"),
        ];

        for (original, transformed) in cases {
            let diff = compute_word_diff(original, transformed);
            let counts = word_change_counts(original, transformed);
            assert_eq!(counts.added_count, diff.added_count, "{original:?} -> {transformed:?}");
            assert_eq!(counts.removed_count, diff.removed_count, "{original:?} -> {transformed:?}");
        }
    }

    #[test]
    fn unchanged_count_matches_independent_diff() {
        // similar's Myers diff minimizes edits, so its equal-token total is
        // the common-subsequence length as well
        let cases = [
            ("the quick fox", "the quick brown fox"),
            ("I am a very tall guy.", "I'm very tall."),
            ("one two three four", "one three five four"),
            ("a b c", "x y z"),
        ];

        for (original, transformed) in cases {
            let diff = compute_word_diff(original, transformed);
            let unchanged = count(&diff.original_diff, ChangeType::Unchanged);

            let original_words: Vec<&str> = original.split_whitespace().collect();
            let transformed_words: Vec<&str> = transformed.split_whitespace().collect();
            let equal: usize = similar::capture_diff_slices(
                similar::Algorithm::Myers,
                &original_words,
                &transformed_words,
            )
            .iter()
            .map(|op| match op {
                similar::DiffOp::Equal { len, .. } => *len,
                _ => 0,
            })
            .sum();

            assert_eq!(unchanged, equal, "{original:?} -> {transformed:?}");
        }
    }

    #[test]
    fn long_documents_take_the_compact_path() {
        // Large enough that the quadratic table is skipped; unique words
        // keep the expected result unambiguous
        let original_words: Vec<String> = (0..1200).map(|i| format!("w{i}")).collect();
        let mut transformed_words = original_words.clone();
        transformed_words[100] = "swapped-in".to_string();
        transformed_words[700] = "also-new".to_string();

        let original = original_words.join(" ");
        let transformed = transformed_words.join(" ");

        let diff = compute_word_diff(&original, &transformed);
        assert_well_formed(&diff, &original, &transformed);
        assert_eq!(diff.added_count, 2);
        assert_eq!(diff.removed_count, 2);
        assert_eq!(count(&diff.original_diff, ChangeType::Unchanged), 1198);

        let counts = word_change_counts(&original, &transformed);
        assert_eq!(counts.added_count, 2);
        assert_eq!(counts.removed_count, 2);
    }

    #[test]
    fn unspaced_script_degrades_to_whole_run_replacement() {
        // Without whitespace there is nothing to split on, so a one-character
        // edit replaces the entire run
        let diff = compute_word_diff("我是一个学生", "我是一个好学生");

        assert_eq!(diff.original_diff.len(), 1);
        assert_eq!(diff.transformed_diff.len(), 1);
        assert_eq!(diff.added_count, 1);
        assert_eq!(diff.removed_count, 1);
    }
}
