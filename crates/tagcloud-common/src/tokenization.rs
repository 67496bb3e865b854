use crate::error::CloudError;
use crate::separators::SeparatorSet;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of same-class characters borrowed from the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Length in bytes; always at least one character.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

fn classify(c: char, separators: &SeparatorSet) -> TokenKind {
    if separators.contains(c) {
        TokenKind::Separator
    } else {
        TokenKind::Word
    }
}

/// Return the word or separator run starting at byte offset `position`.
///
/// The run ends where the next character changes class, or at the end of
/// `text`. Fails with `InvalidPosition` when `position` is past the end or
/// not on a character boundary.
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Token<'a>, CloudError> {
    let invalid = CloudError::InvalidPosition {
        position,
        len: text.len(),
    };
    if position >= text.len() || !text.is_char_boundary(position) {
        return Err(invalid);
    }

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let kind = match chars.next() {
        Some((_, c)) => classify(c, separators),
        None => return Err(invalid),
    };
    let end = chars
        .find(|&(_, c)| classify(c, separators) != kind)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    Ok(Token {
        text: &rest[..end],
        kind,
    })
}

/// Iterator over every token of a text, in document order.
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        // position only ever advances by whole tokens, so it stays on a boundary
        let token = next_token(self.text, self.position, self.separators).ok()?;
        self.position += token.len();
        Some(token)
    }
}

/// Split `text` into alternating word and separator tokens.
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

/// Iterator over word tokens only, separators dropped.
pub struct Words<'a, 's>(Tokens<'a, 's>);

impl<'a, 's> Iterator for Words<'a, 's> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.find(Token::is_word).map(|t| t.text)
    }
}

pub fn words<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Words<'a, 's> {
    Words(tokenize(text, separators))
}
