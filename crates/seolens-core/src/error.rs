//! Error types for seolens

use thiserror::Error;

/// Errors that stop an analysis before a report is produced
///
/// Malformed HTML is never an error: extraction degrades to absent values.
#[derive(Error, Debug)]
pub enum SeoError {
    #[error("invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    #[cfg(feature = "fetch")]
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("non-success status from {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[cfg(feature = "fetch")]
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl SeoError {
    /// True when the analysis never started because the input was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, SeoError::InvalidUrl { .. })
    }

    /// True when the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            #[cfg(feature = "fetch")]
            SeoError::Fetch { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeoError>;
