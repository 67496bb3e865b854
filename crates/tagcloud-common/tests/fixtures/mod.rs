use tagcloud_common::SeparatorSet;

/// Short mixed-case document with sentence punctuation.
pub const CAT_AND_DOG: &str = "the cat sat. THE dog sat!";

/// Multi-line document using the default separator alphabet.
#[allow(dead_code)]
pub const POEM: &str = "Row, row, row your boat,\n\
Gently down the stream.\n\
Merrily, merrily, merrily, merrily,\n\
Life is but a dream.\n";

/// Separators matching `CAT_AND_DOG`.
pub fn sentence_separators() -> SeparatorSet {
    SeparatorSet::new(" .!")
}

/// Concatenate `count` copies of `word` separated by spaces.
#[allow(dead_code)]
pub fn repeat_word(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}
