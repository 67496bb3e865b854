use std::cmp::Ordering;

use crate::error::CloudError;
use crate::frequency::FrequencyMap;
use crate::types::{DisplaySet, TopWords, WordEntry};

/// Check that `n` words can be drawn from a map of `unique_words` entries.
pub fn validate_count(n: usize, unique_words: usize) -> Result<usize, CloudError> {
    if n == 0 || n > unique_words {
        return Err(CloudError::InvalidCount {
            requested: n,
            available: unique_words,
        });
    }
    Ok(n)
}

/// Selection order: count descending, then canonical word ascending.
///
/// The word tie-break decides which of several equally frequent words make
/// the cut when the N-th slot falls inside a run of equal counts.
fn by_frequency(a: &WordEntry, b: &WordEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Every entry of the map in selection order.
pub fn rank_all(freq: &FrequencyMap) -> Vec<WordEntry> {
    let mut ranked: Vec<WordEntry> = freq
        .iter()
        .map(|(word, count)| WordEntry::new(word, count))
        .collect();
    ranked.sort_by(by_frequency);
    ranked
}

/// Pick the `n` most frequent words and the highest count among them.
pub fn select_top(freq: &FrequencyMap, n: usize) -> Result<TopWords, CloudError> {
    validate_count(n, freq.len())?;

    let mut ranked = rank_all(freq);
    ranked.truncate(n);
    let max_count = ranked.first().map(|e| e.count).unwrap_or(0);

    tracing::debug!(
        "selected top {} of {} words, max count {}",
        n,
        freq.len(),
        max_count
    );
    Ok(TopWords {
        entries: ranked,
        max_count,
    })
}

/// Reorder the selected words by canonical text for display. Counts are untouched.
pub fn alphabetize(top: TopWords) -> DisplaySet {
    let TopWords {
        mut entries,
        max_count,
    } = top;
    entries.sort_by(|a, b| a.word.cmp(&b.word));
    DisplaySet { entries, max_count }
}
