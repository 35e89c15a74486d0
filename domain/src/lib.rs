//! Domain layer for tmclass
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification pipeline
//!
//! A [`ClassificationRequest`] (URL or free-text description) is reduced to
//! [`AcquiredContent`], rendered into a prompt by [`ClassificationPromptTemplate`],
//! answered by a language model as a [`RawCompletion`], and finally turned
//! into [`ClassificationRecord`]s by [`parse_classifications`].
//!
//! ## Nice Classification
//!
//! The 45 WIPO classes live in [`nice`]: 1-34 are goods, 35-45 are services.
//! Model output is validated against this range, never rewritten from it.

pub mod classification;
pub mod config;
pub mod core;
pub mod parsing;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use classification::{
    content::{AcquiredContent, MAX_CONTENT_CHARS},
    nice::{self, ClassKind, NiceClass},
    record::{ClassificationRecord, ClassificationResult, RawCompletion},
    request::ClassificationRequest,
    stage::PipelineStage,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::DomainError;
pub use parsing::parse_classifications;
pub use prompt::ClassificationPromptTemplate;
