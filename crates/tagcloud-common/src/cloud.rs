use crate::error::CloudError;
use crate::frequency::{aggregate, FrequencyMap};
use crate::normalization::normalize_document;
use crate::ranking::{alphabetize, select_top};
use crate::scoring::font_size;
use crate::separators::SeparatorSet;
use crate::types::{CloudWord, DisplaySet, FontScale, TagCloud};

/// Inputs of one cloud build besides the document itself.
#[derive(Clone, Debug, Default)]
pub struct CloudOptions {
    pub separators: SeparatorSet,
    pub scale: FontScale,
    /// Strip a BOM and NFC-compose the text before tokenizing.
    pub normalize: bool,
}

/// Count words of `text` under `options`, normalizing first if requested.
pub fn word_counts(text: &str, options: &CloudOptions) -> FrequencyMap {
    if options.normalize {
        aggregate(&normalize_document(text), &options.separators)
    } else {
        aggregate(text, &options.separators)
    }
}

impl TagCloud {
    /// Run the whole pipeline over one document.
    pub fn build(
        document_name: &str,
        text: &str,
        n: usize,
        options: &CloudOptions,
    ) -> Result<Self, CloudError> {
        let freq = word_counts(text, options);
        Self::from_counts(document_name, &freq, n, options.scale)
    }

    /// Build from an already aggregated map. An empty map cannot produce a cloud.
    pub fn from_counts(
        document_name: &str,
        freq: &FrequencyMap,
        n: usize,
        scale: FontScale,
    ) -> Result<Self, CloudError> {
        if freq.is_empty() {
            return Err(CloudError::EmptyDocument);
        }
        let shown = alphabetize(select_top(freq, n)?);
        let words = scale_words(&shown, scale)?;

        tracing::info!(
            "built cloud for {}: {} of {} words, max count {}",
            document_name,
            words.len(),
            freq.len(),
            shown.max_count
        );
        Ok(TagCloud {
            document_name: document_name.to_string(),
            requested: n,
            unique_words: freq.len(),
            max_count: shown.max_count,
            scale,
            words,
        })
    }
}

fn scale_words(shown: &DisplaySet, scale: FontScale) -> Result<Vec<CloudWord>, CloudError> {
    shown
        .entries
        .iter()
        .map(|entry| -> Result<CloudWord, CloudError> {
            Ok(CloudWord {
                word: entry.word.clone(),
                count: entry.count,
                font_size: font_size(entry.count, shown.max_count, scale)?,
            })
        })
        .collect()
}
