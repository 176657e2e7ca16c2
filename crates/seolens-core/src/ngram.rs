//! Sliding-window n-gram frequency analysis

use std::collections::HashMap;

use crate::types::{NGramResult, PhraseCount};

/// Number of phrases kept per n-gram size
pub const TOP_PHRASES: usize = 10;

/// Most frequent contiguous `n`-token phrases, at most [`TOP_PHRASES`] of them
///
/// Phrases are ordered by descending frequency; equal frequencies keep the
/// order in which the phrases were first seen. Fewer than `n` tokens (or
/// `n == 0`) yields an empty list.
pub fn top_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<PhraseCount> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<PhraseCount> = Vec::new();

    for window in tokens.windows(n) {
        let phrase = window
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        match index.get(&phrase) {
            Some(&position) => counts[position].frequency += 1,
            None => {
                index.insert(phrase.clone(), counts.len());
                counts.push(PhraseCount {
                    phrase,
                    frequency: 1,
                });
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(TOP_PHRASES);
    counts
}

/// Bigrams, trigrams and four-grams for a token sequence
pub fn analyze_ngrams<S: AsRef<str>>(tokens: &[S]) -> NGramResult {
    NGramResult {
        bigrams: top_ngrams(tokens, 2),
        trigrams: top_ngrams(tokens, 3),
        fourgrams: top_ngrams(tokens, 4),
    }
}
