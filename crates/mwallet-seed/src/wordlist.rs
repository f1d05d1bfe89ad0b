//! The alternating word table.
//!
//! 512 words, one per line of `wordlist.txt`. A byte `b` at an even position
//! is spelled by word `2*b`, at an odd position by word `2*b + 1`, so the
//! two parity classes never share a word. The line order fixes the
//! byte/word mapping: reordering the file breaks every existing phrase.

use std::collections::HashMap;
use std::sync::LazyLock;

const ALTERNATING_WORDS: &str = include_str!("wordlist.txt");

static WORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| ALTERNATING_WORDS.lines().collect());

/// Normalized word -> table index.
static WORD_INDEXES: LazyLock<HashMap<String, u16>> = LazyLock::new(|| {
    WORDS
        .iter()
        .enumerate()
        .map(|(i, word)| (normalize(word), i as u16))
        .collect()
});

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// The full table, in index order.
pub fn word_list() -> &'static [&'static str] {
    &WORDS
}

/// Table index of `word`, ignoring case and surrounding whitespace.
pub fn word_index(word: &str) -> Option<u16> {
    WORD_INDEXES.get(&normalize(word)).copied()
}

/// The word spelling byte `b` when it appears at `position` in a phrase.
pub fn byte_to_word(b: u8, position: usize) -> &'static str {
    WORDS[usize::from(b) * 2 + position % 2]
}
