use proptest::prelude::*;
use tagcloud_common::frequency::aggregate;
use tagcloud_common::normalization::canonical_word;
use tagcloud_common::ranking::{alphabetize, select_top};
use tagcloud_common::scoring::font_size;
use tagcloud_common::separators::SeparatorSet;
use tagcloud_common::tokenization::{next_token, tokenize};
use tagcloud_common::types::FontScale;

proptest! {
    #[test]
    fn tokens_reconstruct_text(text in ".{1,200}", seps in "[ .,!a-e]{0,6}") {
        let seps = SeparatorSet::new(&seps);
        let tokens: Vec<_> = tokenize(&text, &seps).collect();
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(&joined, &text);
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn next_token_is_maximal(text in "[a-c ,]{1,60}", start in 0usize..60) {
        let seps = SeparatorSet::new(" ,");
        let position = start % text.len();
        let token = next_token(&text, position, &seps).unwrap();
        prop_assert!(!token.is_empty());
        let end = position + token.len();
        if let Some(next) = text[end..].chars().next() {
            prop_assert_ne!(seps.contains(next), !token.is_word());
        }
    }

    #[test]
    fn canonical_is_idempotent(word in "[a-zA-Z0-9\u{00C0}-\u{00FF}\u{1E9E}]{1,20}") {
        let once = canonical_word(&word);
        prop_assert_eq!(canonical_word(&once), once);
    }

    #[test]
    fn case_variants_aggregate_together(word in "[a-z\u{00DF}\u{00E0}-\u{00F6}]{1,10}") {
        let text = format!("{} {} {}", word, word.to_uppercase(), canonical_word(&word));
        let map = aggregate(&text, &SeparatorSet::new(" "));
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.get(&canonical_word(&word)), Some(3));
    }

    #[test]
    fn display_set_is_alphabetical_and_holds_top_counts(
        text in "[a-e ]{1,200}",
        n in 1usize..6,
    ) {
        let map = aggregate(&text, &SeparatorSet::new(" "));
        prop_assume!(!map.is_empty());
        let n = n.min(map.len());
        let top = select_top(&map, n).unwrap();
        let cutoff = top.entries.last().unwrap().count;
        for (word, count) in map.iter() {
            if !top.entries.iter().any(|e| e.word == word) {
                prop_assert!(count <= cutoff);
            }
        }
        let display = alphabetize(top.clone());
        prop_assert_eq!(display.entries.len(), n);
        for pair in display.entries.windows(2) {
            prop_assert!(pair[0].word < pair[1].word);
        }
        prop_assert_eq!(display.max_count, top.max_count);
    }

    #[test]
    fn font_size_within_scale(max_count in 1u32..10_000, count in 1u32..10_000, min in 0u32..50, extra in 0u32..50) {
        let count = count.min(max_count);
        let scale = FontScale::new(min, min + extra).unwrap();
        let size = font_size(count, max_count, scale).unwrap();
        prop_assert!(size >= scale.min && size <= scale.max);
        if count == max_count {
            prop_assert_eq!(size, scale.max);
        }
    }
}
