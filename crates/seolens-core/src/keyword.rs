//! Target keyword matching and density

use log::debug;

use crate::score::round2;
use crate::types::{KeywordStats, PageSignals};

/// Trim and lowercase a user-supplied phrase; blank input means "no target"
pub fn normalize_target(raw: &str) -> Option<String> {
    let target = raw.trim().to_lowercase();
    if target.is_empty() { None } else { Some(target) }
}

/// Match `target` against the normalized body text and the page metadata
///
/// `normalized_text` is the lowercased, letters-only text produced by
/// [`crate::tokenize::normalize_text`]; occurrences are plain non-overlapping
/// substring matches, so a phrase may be found inside a longer word.
pub fn match_keyword(
    normalized_text: &str,
    total_word_count: usize,
    signals: &PageSignals,
    target: Option<&str>,
) -> KeywordStats {
    let Some(target) = target.and_then(normalize_target) else {
        return KeywordStats::default();
    };

    let occurrences = normalized_text.matches(target.as_str()).count();
    let density_percent = keyword_density(occurrences, total_word_count);

    let in_title = contains_phrase(signals.title.as_deref(), &target);
    let in_meta_description = contains_phrase(signals.meta_description.as_deref(), &target);
    let in_any_h1 = signals
        .h1_headings
        .iter()
        .any(|heading| contains_phrase(Some(heading), &target));

    debug!(
        "keyword '{target}': {occurrences} occurrences over {total_word_count} words ({density_percent}%)"
    );

    KeywordStats {
        target_phrase: Some(target),
        occurrences,
        density_percent,
        in_title,
        in_meta_description,
        in_any_h1,
        consistent: in_title && in_meta_description && in_any_h1,
    }
}

/// Occurrences as a percentage of all words, rounded to two decimals
pub fn keyword_density(occurrences: usize, total_word_count: usize) -> f64 {
    if total_word_count == 0 {
        return 0.0;
    }
    round2(occurrences as f64 / total_word_count as f64 * 100.0)
}

fn contains_phrase(haystack: Option<&str>, target: &str) -> bool {
    haystack.is_some_and(|text| text.to_lowercase().contains(target))
}
