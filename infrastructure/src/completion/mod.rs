//! Chat-completion adapter
//!
//! [`OpenAiCompletionClient`] implements the
//! [`CompletionClient`](tmclass_application::CompletionClient) port over the
//! OpenAI chat-completions wire format, for both Azure deployments and
//! OpenAI-compatible endpoints.

mod client;
mod types;

pub use client::{OpenAiCompletionClient, ProviderKind};
