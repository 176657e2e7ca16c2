//! Text normalization and tokenization

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::TokenSet;

/// Low-information words dropped before frequency analysis
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "of", "for", "on", "with", "a", "an", "as", "by", "at", "this",
    "that", "it", "be", "are", "from", "or", "we", "you", "your", "can", "our",
];

/// Tokens of this many characters or fewer are dropped
const MIN_TOKEN_LEN: usize = 2;

/// Lowercase `text` and strip everything that is not an ASCII letter or whitespace
pub fn normalize_text(text: &str) -> String {
    static RE_NON_ALPHA: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^a-z\s]").expect("invalid non-alpha regex"));

    RE_NON_ALPHA
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Split already-normalized text into a [`TokenSet`]
///
/// The word count is taken before stopword and length filtering so it can
/// serve as the denominator for density calculations.
pub fn tokenize_normalized(normalized: &str) -> TokenSet {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let total_word_count = words.len();

    let tokens = words
        .into_iter()
        .filter(|word| word.len() > MIN_TOKEN_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect();

    TokenSet {
        tokens,
        total_word_count,
    }
}

/// Normalize and tokenize raw body text
pub fn tokenize(text: &str) -> TokenSet {
    tokenize_normalized(&normalize_text(text))
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
