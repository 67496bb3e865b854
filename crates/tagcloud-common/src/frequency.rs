use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::normalization::canonical_word;
use crate::separators::SeparatorSet;
use crate::tokenization::words;

/// Occurrence counts keyed by canonical word.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, u32>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`, canonicalizing it first.
    pub fn record(&mut self, word: &str) {
        self.add(canonical_word(word), 1);
    }

    // counts saturate at u32::MAX rather than wrapping
    fn add(&mut self, word: String, count: u32) {
        let slot = self.counts.entry(word).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Add every count of `other` into this map (shard merge). Sums saturate at `u32::MAX`.
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (word, &count) in &other.counts {
            self.add(word.clone(), count);
        }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of unique canonical words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_words(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

impl<'a> FromIterator<(&'a str, u32)> for FrequencyMap {
    /// Build a map from raw `(word, count)` pairs; words are canonicalized and
    /// counts of words sharing a canonical form are summed. Zero counts are skipped.
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for (word, count) in iter {
            if count == 0 {
                continue;
            }
            map.add(canonical_word(word), count);
        }
        map
    }
}

/// Count every word of `text` case-insensitively. Separator runs are discarded.
///
/// An empty text, or one made only of separators, yields an empty map.
pub fn aggregate(text: &str, separators: &SeparatorSet) -> FrequencyMap {
    let mut map = FrequencyMap::new();
    for word in words(text, separators) {
        map.record(word);
    }
    tracing::debug!(
        "aggregated {} unique words ({} total) from {} bytes",
        map.len(),
        map.total_words(),
        text.len()
    );
    map
}
