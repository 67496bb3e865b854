use std::collections::HashSet;

/// Separator alphabet used when none is configured: whitespace plus common punctuation.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,\"*-.!?[];'`~:/()&=|{}@#$%^_+<>\\";

/// Immutable set of characters that bound word tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `separators`. Duplicates collapse.
    pub fn new(separators: &str) -> Self {
        Self {
            chars: separators.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}
