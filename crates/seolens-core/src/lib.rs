//! # seolens-core
//!
//! Core library for on-page SEO analysis of a single HTML document.
//!
//! This library provides:
//! - HTML signal extraction (title, meta description, H1s, image alt coverage, canonical link)
//! - Text normalization, tokenization and n-gram frequency analysis
//! - Target keyword matching and density
//! - A deterministic 0-100 score with recommendations
//!
//! ## Features
//!
//! - `default`: The analysis pipeline only (no network access)
//! - `fetch`: Fetch pages over HTTP(S) with [`fetch_html`]
//!
//! ## Example
//!
//! ```
//! use seolens_core::analyze_html;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Rust HTML parsing</title></head>
//!         <body><h1>Parsing HTML in Rust</h1><p>Rust parsing guide.</p></body>
//!     </html>
//! "#;
//!
//! let report = analyze_html(html, Some("rust"));
//! assert_eq!(report.signals.title.as_deref(), Some("Rust HTML parsing"));
//! assert!(report.keyword.in_title);
//! for recommendation in report.recommendations() {
//!     println!("{recommendation}");
//! }
//! ```

pub mod analyze;
pub mod error;
pub mod extract;
pub mod keyword;
pub mod ngram;
pub mod recommend;
pub mod score;
pub mod tokenize;
pub mod types;
pub mod url_utils;

#[cfg(feature = "fetch")]
pub mod fetch;

// Re-export commonly used types
pub use types::{
    KeywordScores, KeywordStats, NGramResult, PageSignals, PhraseCount, ScoreBreakdown, SeoReport,
    TokenSet,
};

pub use analyze::analyze_html;
pub use error::SeoError;
pub use extract::extract_signals;
pub use keyword::match_keyword;
pub use ngram::{analyze_ngrams, top_ngrams};
pub use recommend::{Recommendation, ScoreTier, Severity, recommend};
pub use score::score;
pub use tokenize::tokenize;
pub use url_utils::validate_url;

#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_html};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_without_title() {
        let report = analyze_html("<html><body><p>No head at all</p></body></html>", None);
        assert_eq!(report.signals.title, None);
        assert_eq!(report.scores.title_score, 0.0);
    }

    #[test]
    fn test_page_without_images() {
        let report = analyze_html("<html><body><h1>Text only</h1></body></html>", None);
        assert_eq!(report.signals.images_total, 0);
        assert_eq!(report.scores.image_score, 10.0);
    }

    #[test]
    fn test_word_count_uses_body_text() {
        let html = r#"
            <html>
                <head><title>Not counted</title></head>
                <body>
                    <p>Three words here</p>
                    <script>var notCounted = 1;</script>
                </body>
            </html>
        "#;
        let report = analyze_html(html, None);
        assert_eq!(report.total_word_count, 3);
    }

    #[test]
    fn test_report_serializes_absent_values_as_null() {
        let report = analyze_html("<p>hello</p>", None);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["signals"]["title"].is_null());
        assert!(json["signals"]["metaDescription"].is_null());
        assert_eq!(json["totalWordCount"], 1);
        assert_eq!(json["scores"]["imageScore"], 10.0);
    }
}
