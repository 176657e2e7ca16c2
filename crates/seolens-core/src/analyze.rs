//! The analysis pipeline: extract, tokenize, count phrases, match the keyword, score

use log::debug;

use crate::extract::extract_signals;
use crate::keyword::match_keyword;
use crate::ngram::analyze_ngrams;
use crate::score::score;
use crate::tokenize::{normalize_text, tokenize_normalized};
use crate::types::SeoReport;

/// Build a [`SeoReport`] from raw HTML and an optional target phrase
///
/// Never fails: malformed HTML yields absent values instead of errors.
pub fn analyze_html(html: &str, target: Option<&str>) -> SeoReport {
    let signals = extract_signals(html);

    let normalized = normalize_text(&signals.body_text);
    let token_set = tokenize_normalized(&normalized);
    let ngrams = analyze_ngrams(&token_set.tokens);
    let keyword = match_keyword(&normalized, token_set.total_word_count, &signals, target);
    let scores = score(&signals, &keyword);

    debug!(
        "analysis complete: {} words, {} tokens, total score {}",
        token_set.total_word_count,
        token_set.tokens.len(),
        scores.total_score
    );

    SeoReport {
        signals,
        total_word_count: token_set.total_word_count,
        ngrams,
        keyword,
        scores,
    }
}
