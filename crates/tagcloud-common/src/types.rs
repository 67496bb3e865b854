use serde::{Deserialize, Serialize};

use crate::error::CloudError;

/// A canonical word and how many times it occurred.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub word: String,
    pub count: u32,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The N highest-frequency entries, count descending, and the largest count among them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopWords {
    pub entries: Vec<WordEntry>,
    pub max_count: u32,
}

/// Selected entries in display order (canonical word ascending).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySet {
    pub entries: Vec<WordEntry>,
    pub max_count: u32,
}

impl DisplaySet {
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

/// Inclusive range of font sizes a word can be rendered at.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontScale {
    pub min: u32,
    pub max: u32,
}

impl FontScale {
    pub const DEFAULT_MIN: u32 = 11;
    pub const DEFAULT_MAX: u32 = 48;

    pub fn new(min: u32, max: u32) -> Result<Self, CloudError> {
        if min > max {
            return Err(CloudError::InvalidFontRange {
                min_font: min,
                max_font: max,
            });
        }
        Ok(Self { min, max })
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// A display entry together with its computed font size.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudWord {
    pub word: String,
    pub count: u32,
    pub font_size: u32,
}

/// Everything a renderer needs to emit one cloud.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCloud {
    pub document_name: String,
    pub requested: usize,
    pub unique_words: usize,
    pub max_count: u32,
    pub scale: FontScale,
    pub words: Vec<CloudWord>,
}
