//! Common types used across seolens

use serde::Serialize;

/// Structured on-page signals pulled out of one HTML document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    /// Trimmed text of the first `<title>`; `None` when missing or empty
    pub title: Option<String>,
    /// First non-empty description from the meta tag priority list
    pub meta_description: Option<String>,
    /// Trimmed text of every `<h1>`, in document order
    pub h1_headings: Vec<String>,
    pub images_total: usize,
    /// Images whose `alt` is absent, empty or whitespace-only
    pub images_missing_alt: usize,
    pub has_canonical_link: bool,
    /// Visible text nodes joined with single spaces
    pub body_text: String,
}

impl PageSignals {
    /// Images that carry usable alt text
    pub fn images_with_alt(&self) -> usize {
        self.images_total.saturating_sub(self.images_missing_alt)
    }
}

/// Normalized words of the body text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    /// Lowercase alphabetic words with stopwords and short words removed
    pub tokens: Vec<String>,
    /// Number of whitespace-separated words before any filtering
    pub total_word_count: usize,
}

/// A phrase and how often it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub frequency: usize,
}

/// Most frequent phrases for each n-gram size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NGramResult {
    pub bigrams: Vec<PhraseCount>,
    pub trigrams: Vec<PhraseCount>,
    pub fourgrams: Vec<PhraseCount>,
}

/// How a target phrase is used on the page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    /// Trimmed, lowercased target; `None` when no phrase was supplied
    pub target_phrase: Option<String>,
    pub occurrences: usize,
    pub density_percent: f64,
    pub in_title: bool,
    pub in_meta_description: bool,
    pub in_any_h1: bool,
    /// Phrase appears in the title, the meta description and at least one H1
    pub consistent: bool,
}

/// Points awarded for the keyword placement checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordScores {
    pub in_title: f64,
    pub in_meta_description: f64,
    pub in_h1: f64,
    pub consistency: f64,
}

impl KeywordScores {
    pub fn sum(&self) -> f64 {
        self.in_title + self.in_meta_description + self.in_h1 + self.consistency
    }
}

/// Sub-scores and the weighted total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Title length in characters, capped at 60
    pub title_score: f64,
    /// Meta description length in characters, capped at 160
    pub desc_score: f64,
    pub h1_score: f64,
    pub image_score: f64,
    pub canonical_score: f64,
    pub keyword_scores: KeywordScores,
    /// Weighted total in `0..=100`
    pub total_score: f64,
}

/// Complete result of analysing one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub signals: PageSignals,
    pub total_word_count: usize,
    pub ngrams: NGramResult,
    pub keyword: KeywordStats,
    pub scores: ScoreBreakdown,
}
