//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a caller fault: the request itself is malformed, so
/// retrying the same input can never succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please provide a URL or a business description")]
    EmptyRequest,

    #[error("Provide either a URL or a business description, not both")]
    AmbiguousRequest,

    #[error("Business description is empty")]
    EmptyDescription,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DomainError {
    /// Check if this error was caused by missing input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyRequest | DomainError::EmptyDescription)
    }
}
