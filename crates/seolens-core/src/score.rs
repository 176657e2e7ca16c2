//! Deterministic scoring of extracted signals

use crate::types::{KeywordScores, KeywordStats, PageSignals, ScoreBreakdown};

/// Title length (in characters) that earns the full title weight
pub const TITLE_TARGET_LEN: usize = 60;
/// Meta description length (in characters) that earns the full description weight
pub const DESCRIPTION_TARGET_LEN: usize = 160;

const TITLE_WEIGHT: f64 = 35.0;
const DESCRIPTION_WEIGHT: f64 = 25.0;
const H1_POINTS: f64 = 10.0;
const IMAGE_POINTS: f64 = 10.0;
const CANONICAL_POINTS: f64 = 5.0;
const KEYWORD_PLACEMENT_POINTS: f64 = 5.0;
const KEYWORD_CONSISTENCY_POINTS: f64 = 10.0;

/// Upper bound of the total score
pub const MAX_SCORE: f64 = 100.0;

/// Round to two decimal places
///
/// Exact binary halves round to the even neighbour, so `0.625` becomes `0.62`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Score a page from its signals and keyword statistics
///
/// The weighted components can add up to 110 when every check passes; the
/// total is clamped to `0..=100`.
pub fn score(signals: &PageSignals, keyword: &KeywordStats) -> ScoreBreakdown {
    let title_score = capped_len(signals.title.as_deref(), TITLE_TARGET_LEN);
    let desc_score = capped_len(signals.meta_description.as_deref(), DESCRIPTION_TARGET_LEN);
    let h1_score = if signals.h1_headings.is_empty() {
        0.0
    } else {
        H1_POINTS
    };
    let image_score = image_score(signals.images_total, signals.images_missing_alt);
    let canonical_score = if signals.has_canonical_link {
        CANONICAL_POINTS
    } else {
        0.0
    };
    let keyword_scores = keyword_scores(keyword);

    let weighted_sum = title_score / TITLE_TARGET_LEN as f64 * TITLE_WEIGHT
        + desc_score / DESCRIPTION_TARGET_LEN as f64 * DESCRIPTION_WEIGHT
        + h1_score
        + image_score
        + keyword_scores.in_title
        + keyword_scores.in_meta_description
        + keyword_scores.in_h1
        + canonical_score
        + keyword_scores.consistency;

    ScoreBreakdown {
        title_score,
        desc_score,
        h1_score,
        image_score,
        canonical_score,
        keyword_scores,
        total_score: round2(weighted_sum).clamp(0.0, MAX_SCORE),
    }
}

/// Share of images with alt text, scaled to 10 points; no images earns full marks
pub fn image_score(images_total: usize, images_missing_alt: usize) -> f64 {
    if images_total == 0 {
        return IMAGE_POINTS;
    }
    let with_alt = images_total.saturating_sub(images_missing_alt);
    round2(with_alt as f64 / images_total as f64 * IMAGE_POINTS)
}

fn keyword_scores(keyword: &KeywordStats) -> KeywordScores {
    if keyword.target_phrase.is_none() {
        return KeywordScores::default();
    }

    let points = |hit: bool, value: f64| if hit { value } else { 0.0 };
    KeywordScores {
        in_title: points(keyword.in_title, KEYWORD_PLACEMENT_POINTS),
        in_meta_description: points(keyword.in_meta_description, KEYWORD_PLACEMENT_POINTS),
        in_h1: points(keyword.in_any_h1, KEYWORD_PLACEMENT_POINTS),
        consistency: points(keyword.consistent, KEYWORD_CONSISTENCY_POINTS),
    }
}

fn capped_len(value: Option<&str>, cap: usize) -> f64 {
    value.map_or(0, |text| text.chars().count()).min(cap) as f64
}
