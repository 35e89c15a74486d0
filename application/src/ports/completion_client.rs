//! Completion client port
//!
//! Defines the interface for sending a single prompt to a hosted language
//! model and receiving its text answer.

use async_trait::async_trait;
use thiserror::Error;
use tmclass_domain::RawCompletion;

/// Errors that can occur during a completion request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited by the model service")]
    RateLimited,

    #[error("Timeout")]
    Timeout,

    #[error("Model response contained no message")]
    EmptyResponse,

    #[error("Request failed (HTTP {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Completion service not configured: {0}")]
    NotConfigured(String),
}

impl CompletionError {
    /// Whether trying again later might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::Timeout | Self::Connection(_) => true,
            Self::RequestFailed { status, .. } => *status >= 500,
            Self::Authentication(_)
            | Self::EmptyResponse
            | Self::InvalidResponse(_)
            | Self::NotConfigured(_) => false,
        }
    }
}

/// Client for a hosted chat-completion model
///
/// One prompt in, one completion out. Implementations (adapters) live in the
/// infrastructure layer and must not retry on their own.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model or deployment identifier used for requests
    fn model(&self) -> &str;

    /// Send `prompt` as a single user message and return the model's text.
    ///
    /// A response carrying no message content at all is
    /// [`CompletionError::EmptyResponse`]; an empty string is a valid answer.
    async fn complete(&self, prompt: &str) -> Result<RawCompletion, CompletionError>;
}
