//! Content acquisition
//!
//! Reduces a [`ClassificationRequest`] to size-bounded [`AcquiredContent`].
//! Descriptions are used as given; URLs go through the [`ContentSource`] port.

use crate::ports::content_source::{AcquisitionError, ContentSource};
use std::sync::Arc;
use tmclass_domain::{AcquiredContent, ClassificationRequest, MAX_CONTENT_CHARS};
use tracing::debug;

/// Turns requests into prompt-ready text
pub struct ContentAcquirer {
    source: Arc<dyn ContentSource>,
    max_chars: usize,
}

impl ContentAcquirer {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            max_chars: MAX_CONTENT_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Acquire the text a request points at.
    ///
    /// The description path never touches the network and cannot fail.
    pub async fn acquire(
        &self,
        request: &ClassificationRequest,
    ) -> Result<AcquiredContent, AcquisitionError> {
        match request {
            ClassificationRequest::Description(text) => {
                Ok(AcquiredContent::with_limit(request.label(), text, self.max_chars))
            }
            ClassificationRequest::Url(url) => self.acquire_url(url).await,
        }
    }

    /// Fetch `url` (already normalised) and bound its text.
    pub async fn acquire_url(&self, url: &str) -> Result<AcquiredContent, AcquisitionError> {
        let text = self.source.fetch_text(url).await?;
        let total = text.chars().count();
        if total > self.max_chars {
            debug!("Truncating {} from {} to {} chars", url, total, self.max_chars);
        }
        Ok(AcquiredContent::with_limit(url, &text, self.max_chars))
    }
}
