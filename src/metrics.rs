//! Text metrics recorded alongside transformation history entries.

/// Sentence terminators across half-width and full-width punctuation,
/// including ellipses and doubled forms
const SENTENCE_ENDINGS: [char; 12] = [
    '.', '!', '?', '。', '！', '？', '…', '⋯', '‼', '⁇', '⁈', '⁉',
];

/// Count sentences by their terminating punctuation.
///
/// A run of consecutive terminators ("...", "!!!", "？！") ends one
/// sentence, not several. Non-blank text without any terminator still reads
/// as one sentence; blank text has none.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut in_run = false;
    for ch in text.chars() {
        let ends_sentence = SENTENCE_ENDINGS.contains(&ch);
        if ends_sentence && !in_run {
            count += 1;
        }
        in_run = ends_sentence;
    }

    if count == 0 { 1 } else { count }
}
