//! Classification domain
//!
//! Value objects flowing through the pipeline, leaf-first:
//!
//! | Type | Stage |
//! |------|-------|
//! | [`request::ClassificationRequest`] | validated input (URL or description) |
//! | [`content::AcquiredContent`] | size-bounded text handed to the prompt |
//! | [`record::RawCompletion`] | verbatim model output |
//! | [`record::ClassificationRecord`] | one parsed class line |
//! | [`record::ClassificationResult`] | the sole output contract |
//!
//! [`stage::PipelineStage`] names the steps for progress and error reporting.

pub mod content;
pub mod nice;
pub mod record;
pub mod request;
pub mod stage;
