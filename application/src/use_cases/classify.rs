//! Classify use case
//!
//! Orchestrates the pipeline: validate → acquire → build prompt → complete → parse.
//! Stages run strictly in sequence and the first failure ends the request.

use crate::config::BehaviorConfig;
use crate::ports::classification_logger::{
    ClassificationEvent, ClassificationLogger, NoClassificationLogger,
};
use crate::ports::completion_client::{CompletionClient, CompletionError};
use crate::ports::content_source::{AcquisitionError, ContentSource};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::acquire_content::ContentAcquirer;
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tmclass_domain::{
    AcquiredContent, ClassificationPromptTemplate, ClassificationRequest, ClassificationResult,
    DomainError, PipelineStage, RawCompletion,
};
use tracing::{debug, info, warn};

/// Errors that can occur during classification
///
/// Each variant belongs to exactly one pipeline stage. Parsing has no
/// variant: unparseable model text is an empty result, not an error.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Invalid request: {0}")]
    Validation(#[from] DomainError),

    #[error("Content acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),
}

impl ClassifyError {
    /// The stage that failed
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Validation(_) => PipelineStage::Validate,
            Self::Acquisition(_) => PipelineStage::Acquire,
            Self::Completion(_) => PipelineStage::Complete,
        }
    }

    /// Whether the same request might succeed later
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Acquisition(e) => e.is_retryable(),
            Self::Completion(e) => e.is_retryable(),
        }
    }

    /// Whether the request itself was at fault
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Raw caller input for the Classify use case
///
/// Validation into a [`ClassificationRequest`] happens inside the use case so
/// that it is reported as the first pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct ClassifyInput {
    pub url: Option<String>,
    pub description: Option<String>,
}

impl ClassifyInput {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            description: None,
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            url: None,
            description: Some(description.into()),
        }
    }

    pub fn to_request(&self) -> Result<ClassificationRequest, DomainError> {
        ClassificationRequest::from_parts(self.url.as_deref(), self.description.as_deref())
    }
}

/// Use case for classifying one business
pub struct ClassifyUseCase {
    acquirer: ContentAcquirer,
    client: Arc<dyn CompletionClient>,
    logger: Arc<dyn ClassificationLogger>,
    behavior: BehaviorConfig,
}

impl ClassifyUseCase {
    pub fn new(source: Arc<dyn ContentSource>, client: Arc<dyn CompletionClient>) -> Self {
        let behavior = BehaviorConfig::default();
        Self {
            acquirer: ContentAcquirer::new(source).with_max_chars(behavior.max_content_chars),
            client,
            logger: Arc::new(NoClassificationLogger),
            behavior,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ClassificationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.acquirer = self.acquirer.with_max_chars(behavior.max_content_chars);
        self.behavior = behavior;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ClassifyInput) -> Result<ClassificationResult, ClassifyError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ClassifyInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ClassificationResult, ClassifyError> {
        progress.on_stage_start(PipelineStage::Validate);
        let request = input.to_request();
        progress.on_stage_complete(PipelineStage::Validate, request.is_ok());

        match request {
            Ok(request) => self.classify_with_progress(&request, progress).await,
            Err(e) => {
                warn!("Rejected request: {}", e);
                let error = ClassifyError::from(e);
                self.log_failure("request", &error);
                Err(error)
            }
        }
    }

    /// Classify an already validated request
    pub async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, ClassifyError> {
        self.classify_with_progress(request, &NoProgress).await
    }

    pub async fn classify_with_progress(
        &self,
        request: &ClassificationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ClassificationResult, ClassifyError> {
        let source = request.label().to_string();
        info!("Classifying {}", source);
        self.logger.log(ClassificationEvent::new(
            "classification_started",
            json!({
                "source": source,
                "kind": if request.is_url() { "url" } else { "description" },
                "model": self.client.model(),
            }),
        ));

        let result = self.run_stages(request, progress).await;
        match &result {
            Ok(result) => {
                info!(
                    "Found {} class line(s) for {}",
                    result.classifications.len(),
                    source
                );
                self.logger.log(ClassificationEvent::new(
                    "classification_completed",
                    json!({
                        "source": source,
                        "classNumbers": result.class_numbers(),
                        "result": result,
                    }),
                ));
            }
            Err(e) => {
                warn!("Classification of {} failed at {}: {}", source, e.stage(), e);
                self.log_failure(&source, e);
            }
        }
        result
    }

    async fn run_stages(
        &self,
        request: &ClassificationRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<ClassificationResult, ClassifyError> {
        // Acquire
        progress.on_stage_start(PipelineStage::Acquire);
        let acquired = self.acquire(request).await;
        progress.on_stage_complete(PipelineStage::Acquire, acquired.is_ok());
        let (content, reference) = acquired?;

        // Build prompt
        progress.on_stage_start(PipelineStage::BuildPrompt);
        let prompt = ClassificationPromptTemplate::build_with_reference(&content, reference.as_ref());
        debug!("Prompt is {} chars", prompt.chars().count());
        progress.on_stage_complete(PipelineStage::BuildPrompt, true);

        // Complete
        progress.on_stage_start(PipelineStage::Complete);
        let completion = self.complete(&prompt).await;
        progress.on_stage_complete(PipelineStage::Complete, completion.is_ok());
        let completion = completion?;
        self.logger.log(ClassificationEvent::new(
            "completion_received",
            json!({
                "source": content.source_label(),
                "model": self.client.model(),
                "raw": completion.as_str(),
            }),
        ));

        // Parse
        progress.on_stage_start(PipelineStage::Parse);
        let result = ClassificationResult::from_completion(request.label(), &completion);
        progress.on_stage_complete(PipelineStage::Parse, true);
        if result.is_empty() {
            debug!("No class lines recognised in completion");
        }

        Ok(result)
    }

    /// Acquire the business content, then the class reference page if one
    /// is configured. Each fetch gets its own acquisition timeout, reported
    /// against the URL that was in flight.
    async fn acquire(
        &self,
        request: &ClassificationRequest,
    ) -> Result<(AcquiredContent, Option<AcquiredContent>), AcquisitionError> {
        let limit = self.behavior.acquire_timeout;

        let content = within(limit, self.acquirer.acquire(request), || {
            AcquisitionError::Timeout {
                url: request.label().to_string(),
            }
        })
        .await?;

        let reference = match &self.behavior.reference_url {
            Some(url) => {
                debug!("Fetching class reference from {}", url);
                let fetched = within(limit, self.acquirer.acquire_url(url), || {
                    AcquisitionError::Timeout { url: url.clone() }
                })
                .await?;
                Some(fetched)
            }
            None => None,
        };

        Ok((content, reference))
    }

    async fn complete(&self, prompt: &str) -> Result<RawCompletion, CompletionError> {
        debug!("Requesting completion from {}", self.client.model());
        within(
            self.behavior.completion_timeout,
            self.client.complete(prompt),
            || CompletionError::Timeout,
        )
        .await
    }

    fn log_failure(&self, source: &str, error: &ClassifyError) {
        self.logger.log(ClassificationEvent::new(
            "classification_failed",
            json!({
                "source": source,
                "stage": error.stage().as_str(),
                "error": error.to_string(),
                "retryable": error.is_retryable(),
            }),
        ));
    }
}

/// Run `fut`, mapping an expired `limit` to `on_timeout()`.
async fn within<T, E, F>(
    limit: Option<Duration>,
    fut: F,
    on_timeout: impl FnOnce() -> E,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match limit {
        Some(limit) => match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => Err(on_timeout()),
        },
        None => fut.await,
    }
}
