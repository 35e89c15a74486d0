//! Prompt domain
//!
//! The single prompt template used to ask a model for Nice classes.

mod template;

pub use template::ClassificationPromptTemplate;
