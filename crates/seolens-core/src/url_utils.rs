use url::Url;

use crate::error::{Result, SeoError};

/// Schemes the fetcher accepts
const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Validate user input as an absolute `http://` or `https://` URL.
///
/// Runs before any network activity; a rejected URL never reaches the fetcher.
pub fn validate_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let invalid = |reason: String| SeoError::InvalidUrl {
        input: trimmed.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|err| match err {
        url::ParseError::RelativeUrlWithoutBase => {
            invalid("missing scheme, use http:// or https://".to_string())
        }
        other => invalid(other.to_string()),
    })?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(invalid(format!(
            "unsupported scheme '{}', use http:// or https://",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(parsed)
}
