//! Word-frequency tag clouds: tokenization, case-insensitive counting, ranking, and rendering.
//!
//! A document is split into word and separator runs under a caller-supplied
//! separator alphabet, words are counted under their canonical casing, the N
//! most frequent are selected (count descending, ties by word) and then shown
//! alphabetically, each sized on an integer font scale proportional to its count.

pub mod cloud;
pub mod error;
pub mod frequency;
pub mod normalization;
pub mod ranking;
pub mod render;
pub mod scoring;
pub mod separators;
pub mod tokenization;
pub mod types;

pub use cloud::CloudOptions;
pub use error::CloudError;
pub use frequency::FrequencyMap;
pub use separators::SeparatorSet;
pub use types::{FontScale, TagCloud};
