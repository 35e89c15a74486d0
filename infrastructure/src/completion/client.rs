//! OpenAI-compatible chat-completions client

use super::types::{ChatMessage, ChatRequest, ChatResponse, error_message};
use crate::config::FileCompletionConfig;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tmclass_application::{CompletionClient, CompletionError};
use tmclass_domain::RawCompletion;
use tracing::{debug, info};

/// Wire flavour of the completion endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Azure OpenAI / AI Foundry deployment, `api-key` header
    #[default]
    Azure,
    /// OpenAI or any compatible endpoint, bearer token
    OpenAi,
}

impl ProviderKind {
    pub const VALID_NAMES: [&'static str; 2] = ["azure", "openai"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Azure => "azure",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" | "azure-openai" | "azure_openai" => Ok(ProviderKind::Azure),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// [`CompletionClient`] for the chat-completions API
///
/// Sends the prompt as one user message. No retries.
pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    provider: ProviderKind,
    url: String,
    api_key: String,
    model: String,
    max_completion_tokens: u32,
    timeout: Duration,
}

impl OpenAiCompletionClient {
    /// Build a client from the `[completion]` section.
    ///
    /// Fails with [`CompletionError::NotConfigured`] when the endpoint or
    /// API key is missing or the provider is unknown.
    pub fn from_config(config: &FileCompletionConfig) -> Result<Self, CompletionError> {
        let provider: ProviderKind = config
            .provider
            .parse()
            .map_err(CompletionError::NotConfigured)?;
        let endpoint = config
            .endpoint()
            .ok_or_else(|| CompletionError::NotConfigured("completion endpoint is not set".into()))?;
        let api_key = config.resolve_api_key().ok_or_else(|| {
            CompletionError::NotConfigured(format!("no API key (set {})", config.api_key_env))
        })?;

        let url = match provider {
            ProviderKind::Azure => azure_deployment_url(endpoint, &config.model, &config.api_version)?,
            ProviderKind::OpenAi => openai_url(endpoint),
        };
        debug!("Completion endpoint: {}", url);

        Ok(Self {
            client: reqwest::Client::new(),
            provider,
            url,
            api_key,
            model: config.model.clone(),
            max_completion_tokens: config.max_completion_tokens,
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Fully derived request URL
    pub fn request_url(&self) -> &str {
        &self.url
    }

    fn map_transport(error: reqwest::Error) -> CompletionError {
        if error.is_timeout() {
            CompletionError::Timeout
        } else if error.is_decode() || error.is_body() {
            CompletionError::InvalidResponse(error.to_string())
        } else {
            CompletionError::Connection(error.to_string())
        }
    }
}

/// `{scheme}://{host}/openai/deployments/{model}/chat/completions?api-version=...`
///
/// Any path on the configured endpoint (e.g. an AI Foundry project path) is dropped.
fn azure_deployment_url(
    endpoint: &str,
    model: &str,
    api_version: &str,
) -> Result<String, CompletionError> {
    let invalid = || CompletionError::NotConfigured(format!("invalid endpoint '{}'", endpoint));

    let (scheme, rest) = endpoint.split_once("://").ok_or_else(invalid)?;
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .filter(|h| !h.is_empty())
        .ok_or_else(invalid)?;

    Ok(format!(
        "{}://{}/openai/deployments/{}/chat/completions?api-version={}",
        scheme, host, model, api_version
    ))
}

fn openai_url(endpoint: &str) -> String {
    format!("{}/chat/completions", endpoint.trim_end_matches('/'))
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<RawCompletion, CompletionError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_completion_tokens: self.max_completion_tokens,
        };

        let request = self.client.post(&self.url).timeout(self.timeout).json(&body);
        let request = match self.provider {
            ProviderKind::Azure => request.header("api-key", self.api_key.as_str()),
            ProviderKind::OpenAi => request.bearer_auth(&self.api_key),
        };

        let response = request.send().await.map_err(Self::map_transport)?;
        let status = response.status();
        if !status.is_success() {
            let message = error_message(&response.text().await.unwrap_or_default());
            return Err(match status.as_u16() {
                401 | 403 => CompletionError::Authentication(message),
                429 => CompletionError::RateLimited,
                code => CompletionError::RequestFailed {
                    status: code,
                    message,
                },
            });
        }

        let text = response.text().await.map_err(Self::map_transport)?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;
        let content = parsed.first_text().ok_or(CompletionError::EmptyResponse)?;

        info!("Completion from {}: {} chars", self.model, content.chars().count());
        Ok(RawCompletion::new(content))
    }
}
