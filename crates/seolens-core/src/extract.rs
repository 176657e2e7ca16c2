//! HTML signal extraction
//!
//! Parses a (possibly malformed) HTML document into [`PageSignals`]. Parsing is
//! lenient: anything the parser cannot find is reported as absent rather than
//! raised as an error.

use log::{debug, warn};
use scraper::{ElementRef, Html, Node, Selector};

use crate::types::PageSignals;

/// Meta tags consulted for the page description, highest priority first
const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"meta[name="description"]"#,
    r#"meta[name="Description"]"#,
    r#"meta[property="og:description"]"#,
    r#"meta[name="twitter:description"]"#,
];

/// Elements whose text never reaches the reader
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract structured SEO signals from raw HTML
pub fn extract_signals(html: &str) -> PageSignals {
    let document = Html::parse_document(html);

    let (images_total, images_missing_alt) = count_images(&document);
    let signals = PageSignals {
        title: extract_title(&document),
        meta_description: extract_meta_description(&document),
        h1_headings: extract_h1_headings(&document),
        images_total,
        images_missing_alt,
        has_canonical_link: select_exists(&document, r#"link[rel~="canonical"]"#),
        body_text: extract_body_text(&document),
    };

    debug!(
        "extracted signals: title={}, description={}, h1={}, images={}/{} missing alt, canonical={}",
        signals.title.is_some(),
        signals.meta_description.is_some(),
        signals.h1_headings.len(),
        signals.images_missing_alt,
        signals.images_total,
        signals.has_canonical_link
    );

    signals
}

fn extract_title(document: &Html) -> Option<String> {
    let title = select_first(document, "title")?;
    non_empty(title.text().collect::<String>().trim())
}

fn extract_meta_description(document: &Html) -> Option<String> {
    DESCRIPTION_SELECTORS.iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).ok()?;
        document
            .select(&selector)
            .filter_map(|meta| meta.value().attr("content"))
            .find_map(|content| non_empty(content.trim()))
    })
}

fn extract_h1_headings(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|h1| h1.text().collect::<String>().trim().to_string())
        .collect()
}

/// Returns `(total, missing_alt)`
fn count_images(document: &Html) -> (usize, usize) {
    let Ok(selector) = Selector::parse("img") else {
        return (0, 0);
    };

    document
        .select(&selector)
        .fold((0, 0), |(total, missing), img| {
            let has_alt = img
                .value()
                .attr("alt")
                .is_some_and(|alt| !alt.trim().is_empty());
            (total + 1, if has_alt { missing } else { missing + 1 })
        })
}

fn extract_body_text(document: &Html) -> String {
    let root = match select_first(document, "body") {
        Some(body) => body,
        None => {
            warn!("document has no <body>; collecting text from the root element");
            document.root_element()
        }
    };

    let mut parts: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

// Helper functions
fn select_first<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next()
}

fn select_exists(document: &Html, selector_str: &str) -> bool {
    select_first(document, selector_str).is_some()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_page() {
        let html = "<html><head><title>Short</title></head><body><h1>Hi</h1><img src=x></body></html>";
        let signals = extract_signals(html);

        assert_eq!(signals.title.as_deref(), Some("Short"));
        assert_eq!(signals.meta_description, None);
        assert_eq!(signals.h1_headings, vec!["Hi".to_string()]);
        assert_eq!(signals.images_total, 1);
        assert_eq!(signals.images_missing_alt, 1);
        assert!(!signals.has_canonical_link);
        assert_eq!(signals.body_text, "Hi");
    }

    #[test]
    fn test_missing_and_empty_title() {
        let missing = extract_signals("<html><body><p>Content</p></body></html>");
        assert_eq!(missing.title, None);

        let empty = extract_signals("<html><head><title>   </title></head></html>");
        assert_eq!(empty.title, None);
    }

    #[test]
    fn test_title_is_trimmed_and_first_wins() {
        let html = "<head><title>\n  First Title \n</title><title>Second</title></head>";
        assert_eq!(extract_signals(html).title.as_deref(), Some("First Title"));
    }

    #[test]
    fn test_meta_description_priority() {
        let html = r#"
            <head>
                <meta name="twitter:description" content="From Twitter">
                <meta property="og:description" content="From Open Graph">
                <meta name="description" content="Standard description">
            </head>
        "#;
        assert_eq!(
            extract_signals(html).meta_description.as_deref(),
            Some("Standard description")
        );
    }

    #[test]
    fn test_meta_description_skips_empty_content() {
        let html = r#"
            <head>
                <meta name="description" content="   ">
                <meta property="og:description" content="Open Graph fallback">
            </head>
        "#;
        assert_eq!(
            extract_signals(html).meta_description.as_deref(),
            Some("Open Graph fallback")
        );
    }

    #[test]
    fn test_meta_description_capitalized_name() {
        let html = r#"<head><meta name="Description" content="Capitalized"></head>"#;
        assert_eq!(
            extract_signals(html).meta_description.as_deref(),
            Some("Capitalized")
        );
    }

    #[test]
    fn test_meta_description_twitter_only() {
        let html = r#"<head><meta name="twitter:description" content="Tweet-sized"></head>"#;
        assert_eq!(
            extract_signals(html).meta_description.as_deref(),
            Some("Tweet-sized")
        );
    }

    #[test]
    fn test_h1_headings_in_order() {
        let html = "<body><h1> One </h1><h2>Not me</h2><div><h1>Two <em>parts</em></h1></div></body>";
        assert_eq!(
            extract_signals(html).h1_headings,
            vec!["One".to_string(), "Two parts".to_string()]
        );
    }

    #[test]
    fn test_image_alt_coverage() {
        let html = r#"
            <body>
                <img src="a.png" alt="A chart">
                <img src="b.png" alt="">
                <img src="c.png" alt="   ">
                <img src="d.png">
            </body>
        "#;
        let signals = extract_signals(html);
        assert_eq!(signals.images_total, 4);
        assert_eq!(signals.images_missing_alt, 3);
        assert_eq!(signals.images_with_alt(), 1);
    }

    #[test]
    fn test_canonical_link() {
        let html = r#"<head><link rel="canonical" href="https://example.com/"></head>"#;
        assert!(extract_signals(html).has_canonical_link);

        let html = r#"<head><link rel="stylesheet" href="style.css"></head>"#;
        assert!(!extract_signals(html).has_canonical_link);
    }

    #[test]
    fn test_body_text_excludes_scripts_and_styles() {
        let html = r#"
            <html>
                <head><title>Ignored title</title></head>
                <body>
                    <h1>Main Content</h1>
                    <script>var secret = "alert";</script>
                    <style>body { color: red; }</style>
                    <noscript>Enable JavaScript</noscript>
                    <p>Safe   content</p>
                    <!-- a comment -->
                </body>
            </html>
        "#;
        assert_eq!(extract_signals(html).body_text, "Main Content Safe   content");
    }

    #[test]
    fn test_malformed_html_degrades() {
        let html = "<html><head><title>Broken<body><h1>Unclosed <img src=x alt='ok'";
        let signals = extract_signals(html);
        assert!(signals.images_missing_alt <= signals.images_total);

        let empty = extract_signals("");
        assert_eq!(empty.title, None);
        assert_eq!(empty.meta_description, None);
        assert!(empty.h1_headings.is_empty());
        assert_eq!(empty.images_total, 0);
        assert_eq!(empty.body_text, "");
    }
}
