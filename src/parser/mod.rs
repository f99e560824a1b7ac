//! Result document parsing and schema definitions.
//!
//! This module handles:
//! - Loading Cucumber JSON from disk or a string
//! - The raw feature / element / step tree
//! - Classifying raw step statuses

pub mod cucumber;
pub mod schema;

// Re-export main types
pub use cucumber::{parse_results, read_results};
pub use schema::{Element, Embedding, Feature, ResultStatus, Step, StepResult, Tag};
