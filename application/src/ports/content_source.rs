//! Content source port
//!
//! Defines how the application layer obtains readable text for a URL.
//! The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while acquiring content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionError {
    #[error("Could not reach {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("{url} is too large ({bytes} bytes)")]
    TooLarge { url: String, bytes: u64 },

    #[error("Could not read body of {url}: {message}")]
    Body { url: String, message: String },
}

impl AcquisitionError {
    /// The URL the failed fetch targeted
    pub fn url(&self) -> &str {
        match self {
            Self::Unreachable { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::Timeout { url }
            | Self::TooLarge { url, .. }
            | Self::Body { url, .. } => url,
        }
    }

    /// Whether trying again later might succeed.
    ///
    /// Connection failures, timeouts and 5xx/429 responses are transient;
    /// 4xx responses and oversized pages are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unreachable { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::TooLarge { .. } | Self::Body { .. } => false,
        }
    }
}

/// Source of readable page text
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch `url` and reduce it to plain text.
    ///
    /// `url` has already been normalised to an absolute http(s) URL.
    /// The returned text is not truncated; size limits are applied by the caller.
    async fn fetch_text(&self, url: &str) -> Result<String, AcquisitionError>;
}
