//! View-scoped cache for computed diffs.
//!
//! Recomputing a diff is cheap for a clipboard snippet but wasteful when a
//! history view re-renders the same entry on every frame. The cache keys on
//! a content hash of the text pair, so a stored result stays valid for as
//! long as the texts themselves; each view owns its own cache and nothing is
//! shared process-wide.

use crate::diff::{self, TextDiffResult};
use std::collections::HashMap;
use xxhash_rust::xxh64::xxh64;

/// Diff results keyed by a 64-bit content hash of the text pair
#[derive(Debug, Default)]
pub struct DiffCache {
    entries: HashMap<u64, TextDiffResult>,
}

impl DiffCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the diff for the pair, computing and storing it on first use
    pub fn get_or_compute(&mut self, original: &str, transformed: &str) -> &TextDiffResult {
        let key = pair_key(original, transformed);
        self.entries
            .entry(key)
            .or_insert_with(|| diff::compute_word_diff(original, transformed))
    }

    /// Look up a previously computed diff without computing anything
    pub fn get(&self, original: &str, transformed: &str) -> Option<&TextDiffResult> {
        self.entries.get(&pair_key(original, transformed))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored result, e.g. when the owning view closes
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// XXHash64 over a length-framed encoding of the pair.
///
/// The length prefix keeps pairs like ("ab", "c") and ("a", "bc") from
/// collapsing onto the same key.
fn pair_key(original: &str, transformed: &str) -> u64 {
    let mut buf = Vec::with_capacity(8 + original.len() + transformed.len());
    buf.extend_from_slice(&(original.len() as u64).to_le_bytes());
    buf.extend_from_slice(original.as_bytes());
    buf.extend_from_slice(transformed.as_bytes());
    xxh64(&buf, 0)
}
