use unicode_normalization::UnicodeNormalization;

/// Canonical display form of a word: first character upper case, the rest lower case.
///
/// The word is case-folded (lower, then upper) before the first character is
/// taken, so letters with several case forms (`ß`, `ẞ`, `SS`) all reach the
/// same key, and that key maps back onto itself.
pub fn canonical_word(word: &str) -> String {
    let upper = word.to_lowercase().to_uppercase();
    let mut chars = upper.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            let mut result = String::with_capacity(first.len_utf8() + rest.len());
            result.push(first);
            result.push_str(&rest);
            result
        }
        None => String::new(),
    }
}

/// Prepare a document for tokenization: BOM removal and Unicode NFC composition.
///
/// Line breaks and all other characters are left in place.
pub fn normalize_document(text: &str) -> String {
    let no_bom = text.replace('\u{FEFF}', "");
    no_bom.nfc().collect()
}
