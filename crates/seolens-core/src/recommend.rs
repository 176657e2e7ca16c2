//! Human-readable guidance derived from a finished report

use std::fmt;

use serde::Serialize;

use crate::types::SeoReport;

/// Lower bound of the [`ScoreTier::Strong`] tier
pub const STRONG_THRESHOLD: f64 = 85.0;
/// Lower bound of the [`ScoreTier::NeedsWork`] tier
pub const NEEDS_WORK_THRESHOLD: f64 = 60.0;

/// Band a total score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// 85 and above
    Strong,
    /// 60 up to (not including) 85
    NeedsWork,
    /// Below 60
    Low,
}

impl ScoreTier {
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= STRONG_THRESHOLD {
            ScoreTier::Strong
        } else if total_score >= NEEDS_WORK_THRESHOLD {
            ScoreTier::NeedsWork
        } else {
            ScoreTier::Low
        }
    }
}

/// How urgent a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
    Success,
}

/// One piece of guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    MissingTitle,
    MissingMetaDescription,
    MissingH1,
    AllImagesMissingAlt,
    StrongScore,
    RoomForImprovement,
    LowScore,
    KeywordMismatch,
}

impl Recommendation {
    pub fn severity(&self) -> Severity {
        match self {
            Recommendation::StrongScore => Severity::Success,
            Recommendation::RoomForImprovement => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::MissingTitle => {
                "Missing title tag. Add a descriptive <title> of up to 60 characters."
            }
            Recommendation::MissingMetaDescription => {
                "Missing meta description. Add a summary of up to 160 characters."
            }
            Recommendation::MissingH1 => "No H1 tag found. Give the page one clear main heading.",
            Recommendation::AllImagesMissingAlt => {
                "All images are missing alt text. Describe each meaningful image."
            }
            Recommendation::StrongScore => "Great job! The page follows on-page SEO basics well.",
            Recommendation::RoomForImprovement => {
                "Decent, but there is room for improvement in the metadata and structure."
            }
            Recommendation::LowScore => {
                "Low SEO score. Work on the title, meta description, headings and image alt text."
            }
            Recommendation::KeywordMismatch => {
                "Target keyword is not used consistently. Place it in the title, the meta description and an H1."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Derive recommendations from a report
///
/// Missing structural elements each produce a warning and suppress the score
/// tier message. Otherwise the tier message is emitted, followed by a keyword
/// mismatch warning when a target phrase was supplied but not placed in the
/// title, the meta description and an H1.
pub fn recommend(report: &SeoReport) -> Vec<Recommendation> {
    let signals = &report.signals;
    let mut structural = Vec::new();

    if signals.title.is_none() {
        structural.push(Recommendation::MissingTitle);
    }
    if signals.meta_description.is_none() {
        structural.push(Recommendation::MissingMetaDescription);
    }
    if signals.h1_headings.is_empty() {
        structural.push(Recommendation::MissingH1);
    }
    if signals.images_total > 0 && signals.images_missing_alt == signals.images_total {
        structural.push(Recommendation::AllImagesMissingAlt);
    }

    if !structural.is_empty() {
        return structural;
    }

    let mut recommendations = vec![match ScoreTier::from_score(report.scores.total_score) {
        ScoreTier::Strong => Recommendation::StrongScore,
        ScoreTier::NeedsWork => Recommendation::RoomForImprovement,
        ScoreTier::Low => Recommendation::LowScore,
    }];

    if report.keyword.target_phrase.is_some() && !report.keyword.consistent {
        recommendations.push(Recommendation::KeywordMismatch);
    }

    recommendations
}

impl SeoReport {
    /// Guidance for this report, see [`recommend`]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommend(self)
    }
}
