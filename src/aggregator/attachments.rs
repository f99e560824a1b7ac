//! Embedded attachment pass.
//!
//! Steps may carry base64 payloads (screenshots). They are handed to an
//! [`AttachmentSink`] in a pass of their own, before statistics, so the
//! counting in `stats` stays free of side effects. The pass returns an
//! index from step position to the reference path the sink produced.

use crate::parser::schema::Feature;
use crate::utils::config::{SCREENSHOT_EXTENSION, UNNAMED_SCENARIO};
use crate::utils::error::AttachmentError;
use log::{debug, warn};
use std::collections::HashMap;

/// Capability that stores one encoded attachment for a scenario
pub trait AttachmentSink {
    /// Store `encoded` (base64) for the scenario and return its reference path.
    ///
    /// Storing the same scenario twice must target the same location.
    fn store(&mut self, scenario_name: Option<&str>, encoded: &str) -> Result<String, AttachmentError>;
}

/// Location of a step inside the result document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepPosition {
    pub feature: usize,
    pub element: usize,
    pub step: usize,
}

impl StepPosition {
    pub fn new(feature: usize, element: usize, step: usize) -> Self {
        Self { feature, element, step }
    }
}

/// Reference paths of materialized attachments, by step
#[derive(Debug, Clone, Default)]
pub struct AttachmentIndex {
    paths: HashMap<StepPosition, String>,
}

impl AttachmentIndex {
    pub fn insert(&mut self, position: StepPosition, path: String) {
        self.paths.insert(position, path);
    }

    pub fn get(&self, position: StepPosition) -> Option<&str> {
        self.paths.get(&position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// File name a scenario's screenshot is stored under.
///
/// Every whitespace character becomes `_`; a missing name becomes `unnamed`.
pub fn screenshot_file_name(scenario_name: Option<&str>) -> String {
    let stem: String = match scenario_name {
        Some(name) => name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect(),
        None => UNNAMED_SCENARIO.to_string(),
    };
    format!("{}.{}", stem, SCREENSHOT_EXTENSION)
}

/// Hand every embedding of the document to `sink`
///
/// **Public** - run before `aggregate_with_attachments`
///
/// Embeddings are visited in document order. When a step has several,
/// the last stored path is the one recorded. Payloads that are not valid
/// base64, and scenario names that cannot be a file name, are logged and
/// skipped.
///
/// # Errors
/// Any sink I/O error
pub fn collect_attachments<S>(features: &[Feature], sink: &mut S) -> Result<AttachmentIndex, AttachmentError>
where
    S: AttachmentSink + ?Sized,
{
    let mut index = AttachmentIndex::default();

    for (feature_index, feature) in features.iter().enumerate() {
        let Some(elements) = &feature.elements else {
            continue;
        };

        for (element_index, element) in elements.iter().enumerate() {
            for (step_index, step) in element.steps.iter().enumerate() {
                for embedding in &step.embeddings {
                    match sink.store(element.name.as_deref(), &embedding.data) {
                        Ok(path) => {
                            debug!("Stored attachment: {}", path);
                            index.insert(StepPosition::new(feature_index, element_index, step_index), path);
                        }
                        Err(err @ (AttachmentError::Decode(_) | AttachmentError::InvalidName(_))) => {
                            warn!(
                                "Skipping attachment in scenario {:?}: {}",
                                element.name.as_deref().unwrap_or(UNNAMED_SCENARIO),
                                err
                            );
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }
    }

    debug!("Materialized attachments for {} steps", index.len());

    Ok(index)
}
