//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod acquire_content;
pub mod classify;
