use thiserror::Error;

/// Contract violations raised by the tag cloud pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CloudError {
    #[error("invalid token position {position} for text of {len} bytes")]
    InvalidPosition { position: usize, len: usize },

    #[error("invalid word count {requested}: must be between 1 and {available}")]
    InvalidCount { requested: usize, available: usize },

    #[error("invalid font scale: count {count}, max count {max_count}, fonts {min_font}..={max_font}")]
    InvalidScale {
        count: u32,
        max_count: u32,
        min_font: u32,
        max_font: u32,
    },

    #[error("invalid font range {min_font}..={max_font}: minimum exceeds maximum")]
    InvalidFontRange { min_font: u32, max_font: u32 },

    #[error("document contains no words")]
    EmptyDocument,
}
