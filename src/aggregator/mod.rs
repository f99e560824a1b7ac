//! Aggregation of result documents into report statistics.
//!
//! This module transforms parsed features into:
//! - Per-element step counts and time
//! - Per-feature scenario buckets, time and failed flag
//! - Suite-wide feature and scenario totals
//!
//! Screenshot materialization is a separate pass (`attachments`).

pub mod attachments;
pub mod report;
pub mod stats;

// Re-export main types and functions
pub use attachments::{collect_attachments, screenshot_file_name, AttachmentIndex, AttachmentSink, StepPosition};
pub use report::{ElementReport, FeatureReport, Report, StatusCounts, StepReport, SuiteSummary};
pub use stats::{aggregate, aggregate_with_attachments};
