use std::fmt::Write as FmtWrite;

use seolens_core::score::{DESCRIPTION_TARGET_LEN, MAX_SCORE, TITLE_TARGET_LEN};
use seolens_core::{PhraseCount, Recommendation, ScoreTier, SeoReport, Severity};
use serde::Serialize;

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 18;
const GAUGE_WIDTH: usize = 20;

/// JSON document emitted by `--json`
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub source: &'a str,
    pub report: &'a SeoReport,
    pub tier: ScoreTier,
    pub recommendations: Vec<JsonRecommendation>,
}

#[derive(Serialize)]
pub struct JsonRecommendation {
    pub kind: Recommendation,
    pub severity: Severity,
    pub message: &'static str,
}

impl<'a> JsonReport<'a> {
    pub fn new(source: &'a str, report: &'a SeoReport) -> Self {
        Self {
            source,
            report,
            tier: ScoreTier::from_score(report.scores.total_score),
            recommendations: report
                .recommendations()
                .into_iter()
                .map(|kind| JsonRecommendation {
                    kind,
                    severity: kind.severity(),
                    message: kind.message(),
                })
                .collect(),
        }
    }
}

pub fn render_json(source: &str, report: &SeoReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(source, report))
}

/// Render the human-readable report
pub fn render_text(source: &str, report: &SeoReport) -> String {
    let signals = &report.signals;
    let mut output = String::new();

    push_section_header(&mut output, "🔍", &format!("SEO Report: {source}"));
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "🔖", "Title Tag");
    let _ = writeln!(
        &mut output,
        "{}",
        signals.title.as_deref().unwrap_or("❌ No title tag")
    );
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "📝", "Meta Description");
    let _ = writeln!(
        &mut output,
        "{}",
        signals
            .meta_description
            .as_deref()
            .unwrap_or("❌ No meta description")
    );
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "📢", "H1 Tags");
    if signals.h1_headings.is_empty() {
        let _ = writeln!(&mut output, "❌ No H1 tag found");
    }
    for (i, heading) in signals.h1_headings.iter().enumerate() {
        let _ = writeln!(&mut output, "H1 #{}: {}", i + 1, heading);
    }
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "🖼️", "Images & Links");
    push_key_value(&mut output, "Total Images", &signals.images_total.to_string());
    push_key_value(
        &mut output,
        "Missing ALT Text",
        &signals.images_missing_alt.to_string(),
    );
    push_key_value(
        &mut output,
        "Canonical Link",
        if signals.has_canonical_link { "yes" } else { "no" },
    );
    push_key_value(
        &mut output,
        "Word Count",
        &format!("{} words on the page", report.total_word_count),
    );
    let _ = writeln!(&mut output);

    if let Some(target) = report.keyword.target_phrase.as_deref() {
        let keyword = &report.keyword;
        push_section_header(&mut output, "🎯", &format!("Keyword: \"{target}\""));
        push_key_value(&mut output, "Occurrences", &keyword.occurrences.to_string());
        push_key_value(
            &mut output,
            "Density",
            &format!("{:.2}%", keyword.density_percent),
        );
        push_key_value(&mut output, "In Title", yes_no(keyword.in_title));
        push_key_value(
            &mut output,
            "In Description",
            yes_no(keyword.in_meta_description),
        );
        push_key_value(&mut output, "In H1", yes_no(keyword.in_any_h1));
        push_key_value(&mut output, "Consistent", yes_no(keyword.consistent));
        let _ = writeln!(&mut output);
    }

    render_phrase_table(&mut output, "Top Bigrams", &report.ngrams.bigrams);
    render_phrase_table(&mut output, "Top Trigrams", &report.ngrams.trigrams);
    render_phrase_table(&mut output, "Top 4-grams", &report.ngrams.fourgrams);

    let scores = &report.scores;
    push_section_header(&mut output, "📊", "Scores");
    push_key_value(
        &mut output,
        "Title",
        &gauge(scores.title_score, TITLE_TARGET_LEN as f64),
    );
    push_key_value(
        &mut output,
        "Description",
        &gauge(scores.desc_score, DESCRIPTION_TARGET_LEN as f64),
    );
    push_key_value(&mut output, "H1", &format!("{}", scores.h1_score));
    push_key_value(&mut output, "Images", &format!("{}", scores.image_score));
    push_key_value(&mut output, "Canonical", &format!("{}", scores.canonical_score));
    if report.keyword.target_phrase.is_some() {
        push_key_value(
            &mut output,
            "Keyword",
            &format!("{}", scores.keyword_scores.sum()),
        );
    }
    push_key_value(&mut output, "Total", &gauge(scores.total_score, MAX_SCORE));
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "💡", "Recommendations");
    for recommendation in report.recommendations() {
        let _ = writeln!(
            &mut output,
            "{} {}",
            severity_icon(recommendation.severity()),
            recommendation
        );
    }

    output
}

fn render_phrase_table(buf: &mut String, title: &str, phrases: &[PhraseCount]) {
    if phrases.is_empty() {
        return;
    }

    push_section_header(buf, "🔠", title);
    let width = phrases
        .iter()
        .map(|p| p.phrase.chars().count())
        .max()
        .unwrap_or(0)
        .max("Phrase".len());

    let _ = writeln!(buf, "| {:<width$} | Frequency |", "Phrase", width = width);
    let _ = writeln!(buf, "| {} | --------- |", "-".repeat(width));
    for entry in phrases {
        let _ = writeln!(
            buf,
            "| {:<width$} | {:>9} |",
            entry.phrase,
            entry.frequency,
            width = width
        );
    }
    let _ = writeln!(buf);
}

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

/// Horizontal bar showing `value` out of `max`
fn gauge(value: f64, max: f64) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * GAUGE_WIDTH as f64).round() as usize;
    format!(
        "{}{} {value} / {max}",
        "█".repeat(filled),
        "░".repeat(GAUGE_WIDTH - filled)
    )
}

fn yes_no(value: bool) -> &'static str {
    if value { "✅ yes" } else { "❌ no" }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
        Severity::Success => "✅",
    }
}
