//! Classification request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// What to classify (Value Object)
///
/// Exactly one of URL or description, non-empty after trimming. The URL form
/// is normalised at construction so downstream stages only ever see an
/// `http://` or `https://` address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationRequest {
    Url(String),
    Description(String),
}

impl ClassificationRequest {
    /// Build a request from the two optional caller fields.
    ///
    /// Blank fields count as absent. Both absent is [`DomainError::EmptyRequest`],
    /// both present is [`DomainError::AmbiguousRequest`].
    pub fn from_parts(url: Option<&str>, description: Option<&str>) -> Result<Self, DomainError> {
        let url = url.map(str::trim).filter(|s| !s.is_empty());
        let description = description.map(str::trim).filter(|s| !s.is_empty());

        match (url, description) {
            (Some(_), Some(_)) => Err(DomainError::AmbiguousRequest),
            (Some(url), None) => Self::url(url),
            (None, Some(description)) => Self::description(description),
            (None, None) => Err(DomainError::EmptyRequest),
        }
    }

    /// Create a URL request, prepending `https://` when no scheme is given.
    pub fn url(url: impl AsRef<str>) -> Result<Self, DomainError> {
        normalize_url(url.as_ref()).map(Self::Url)
    }

    /// Create a description request. The text is trimmed.
    pub fn description(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        Ok(Self::Description(text.to_string()))
    }

    pub fn is_url(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Short label for logs and the result's `source` field
    pub fn label(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Description(_) => "description",
        }
    }
}

/// Normalise a user-supplied URL.
///
/// `example.com` becomes `https://example.com`; any scheme other than
/// http/https is rejected.
pub fn normalize_url(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyRequest);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUrl(trimmed.to_string()));
    }

    let (scheme, rest) = match trimmed.split_once("://") {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => ("https".to_string(), trimmed),
    };

    if scheme != "http" && scheme != "https" {
        return Err(DomainError::InvalidUrl(trimmed.to_string()));
    }
    if rest.is_empty() || rest.starts_with('/') {
        return Err(DomainError::InvalidUrl(trimmed.to_string()));
    }

    Ok(format!("{}://{}", scheme, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_description() {
        let req = ClassificationRequest::from_parts(None, Some("  We sell mugs  ")).unwrap();
        assert_eq!(req, ClassificationRequest::Description("We sell mugs".to_string()));
        assert_eq!(req.label(), "description");
    }

    #[test]
    fn test_from_parts_url() {
        let req = ClassificationRequest::from_parts(Some("https://shop.example"), None).unwrap();
        assert!(req.is_url());
        assert_eq!(req.label(), "https://shop.example");
    }

    #[test]
    fn test_from_parts_both_unset() {
        assert_eq!(
            ClassificationRequest::from_parts(None, None),
            Err(DomainError::EmptyRequest)
        );
    }

    #[test]
    fn test_from_parts_both_blank() {
        assert_eq!(
            ClassificationRequest::from_parts(Some("   "), Some("")),
            Err(DomainError::EmptyRequest)
        );
    }

    #[test]
    fn test_from_parts_both_set() {
        assert_eq!(
            ClassificationRequest::from_parts(Some("example.com"), Some("mugs")),
            Err(DomainError::AmbiguousRequest)
        );
    }

    #[test]
    fn test_blank_description_rejected() {
        assert_eq!(
            ClassificationRequest::description(" \n\t "),
            Err(DomainError::EmptyDescription)
        );
    }

    #[test]
    fn test_url_without_scheme_gets_https() {
        let req = ClassificationRequest::url("example.com/about").unwrap();
        assert_eq!(req, ClassificationRequest::Url("https://example.com/about".to_string()));
    }

    #[test]
    fn test_url_scheme_is_lowercased() {
        assert_eq!(normalize_url("HTTP://example.com").unwrap(), "http://example.com");
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        assert!(matches!(
            normalize_url("ftp://example.com"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_with_whitespace_rejected() {
        assert!(matches!(
            normalize_url("example .com"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_without_host_rejected() {
        assert!(matches!(normalize_url("https://"), Err(DomainError::InvalidUrl(_))));
        assert!(matches!(normalize_url("https:///path"), Err(DomainError::InvalidUrl(_))));
    }
}
