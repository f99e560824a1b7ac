//! Annotated report tree produced by the aggregator.
//!
//! The raw input is never modified. Every feature, element and step is
//! rebuilt here with its derived counts, and the suite totals travel next
//! to them in [`Report`]. Renderers consume this tree only.

use crate::parser::schema::{ResultStatus, Step, Tag};
use serde::{Deserialize, Serialize};

/// Scenario buckets in classification priority order
const CLASSIFICATION_ORDER: [ResultStatus; 5] = [
    ResultStatus::Undefined,
    ResultStatus::Failed,
    ResultStatus::Skipped,
    ResultStatus::Pending,
    ResultStatus::Passed,
];

/// Counts per status bucket
///
/// Used for step counts of an element, scenario counts of a feature
/// and scenario totals of the suite. `Undefined` is stored as `notdefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub pending: u32,
    pub notdefined: u32,
}

impl StatusCounts {
    pub fn increment(&mut self, status: ResultStatus) {
        *self.slot_mut(status) += 1;
    }

    pub fn get(&self, status: ResultStatus) -> u32 {
        match status {
            ResultStatus::Passed => self.passed,
            ResultStatus::Failed => self.failed,
            ResultStatus::Skipped => self.skipped,
            ResultStatus::Pending => self.pending,
            ResultStatus::Undefined => self.notdefined,
        }
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.skipped + self.pending + self.notdefined
    }

    pub fn add(&mut self, other: &StatusCounts) {
        for status in CLASSIFICATION_ORDER {
            *self.slot_mut(status) += other.get(status);
        }
    }

    /// Pick the single bucket an element with these step counts belongs to.
    ///
    /// Priority is notdefined, failed, skipped, pending, passed; the first
    /// non-zero count wins. All-zero counts classify as `None`.
    pub fn classify(&self) -> Option<ResultStatus> {
        CLASSIFICATION_ORDER
            .into_iter()
            .find(|status| self.get(*status) > 0)
    }

    fn slot_mut(&mut self, status: ResultStatus) -> &mut u32 {
        match status {
            ResultStatus::Passed => &mut self.passed,
            ResultStatus::Failed => &mut self.failed,
            ResultStatus::Skipped => &mut self.skipped,
            ResultStatus::Pending => &mut self.pending,
            ResultStatus::Undefined => &mut self.notdefined,
        }
    }
}

/// Suite-wide totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteSummary {
    /// Features without a failed scenario
    pub passed: u32,

    /// Features with at least one failed scenario
    pub failed: u32,

    /// Sum of all feature times
    pub total_time: f64,

    /// Scenario buckets summed over all features
    pub scenarios: StatusCounts,
}

impl SuiteSummary {
    /// Fold one summarized feature into the totals
    pub fn record(&mut self, feature: &FeatureReport) {
        if feature.is_failed {
            self.failed += 1;
        } else {
            self.passed += 1;
        }

        self.total_time += feature.time;
        self.scenarios.add(&feature.scenarios);
    }

    /// Number of features recorded
    pub fn features(&self) -> u32 {
        self.passed + self.failed
    }
}

/// Complete annotated report handed to the renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Local time the report was created
    pub generated_at: String,

    pub suite: SuiteSummary,

    /// Features in input order
    pub features: Vec<FeatureReport>,
}

impl Report {
    pub fn new(suite: SuiteSummary, features: Vec<FeatureReport>) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            suite,
            features,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.suite.failed > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub name: Option<String>,
    pub keyword: Option<String>,
    pub uri: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<Tag>,

    /// One bucket per classified element
    pub scenarios: StatusCounts,

    /// Sum of element times
    pub time: f64,

    /// True when any element was classified as failed
    pub is_failed: bool,

    pub elements: Vec<ElementReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementReport {
    pub name: Option<String>,
    pub keyword: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub tags: Vec<Tag>,

    /// One bucket per step that carried a result
    pub counts: StatusCounts,

    /// Sum of step durations
    pub time: f64,

    /// Feature-level bucket this element landed in, if any
    pub classification: Option<ResultStatus>,

    pub steps: Vec<StepReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub keyword: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,

    /// Raw status string as found in the input
    pub status: Option<String>,

    pub duration: Option<f64>,
    pub error_message: Option<String>,

    /// Reference path of the materialized screenshot
    pub image: Option<String>,
}

impl StepReport {
    pub fn from_step(step: &Step, image: Option<String>) -> Self {
        let result = step.result.as_ref();
        Self {
            keyword: step.keyword.clone(),
            name: step.name.clone(),
            text: step.text.clone(),
            status: result.map(|r| r.status.clone()),
            duration: result.and_then(|r| r.duration),
            error_message: result.and_then(|r| r.error_message.clone()),
            image,
        }
    }
}
