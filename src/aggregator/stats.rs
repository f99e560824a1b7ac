//! Statistics pass over a parsed result document.
//!
//! Walks features, elements and steps in input order and builds the
//! annotated [`Report`]. Per element every step with a result lands in
//! exactly one status count; per feature every element lands in at most
//! one scenario bucket; per suite every feature is either passed or failed.
//!
//! No I/O happens here. Screenshot paths come in through an
//! [`AttachmentIndex`] built beforehand.

use super::attachments::{AttachmentIndex, StepPosition};
use super::report::{ElementReport, FeatureReport, Report, StatusCounts, StepReport, SuiteSummary};
use crate::parser::schema::{Element, Feature, ResultStatus};
use log::debug;

/// Aggregate a result document without screenshot references
///
/// **Public** - main entry point for statistics
pub fn aggregate(features: &[Feature]) -> Report {
    aggregate_with_attachments(features, &AttachmentIndex::default())
}

/// Aggregate a result document, attaching screenshot paths from `images`
///
/// **Public** - used once attachments have been materialized
///
/// # Arguments
/// * `features` - Raw features in input order
/// * `images` - Reference paths keyed by step position
///
/// # Returns
/// Annotated report with features in input order and suite totals
pub fn aggregate_with_attachments(features: &[Feature], images: &AttachmentIndex) -> Report {
    debug!("Aggregating {} features", features.len());

    let (suite, reports) = features.iter().enumerate().fold(
        (SuiteSummary::default(), Vec::with_capacity(features.len())),
        |(mut suite, mut reports), (feature_index, feature)| {
            let report = summarize_feature(feature_index, feature, images);
            suite.record(&report);
            reports.push(report);
            (suite, reports)
        },
    );

    debug!(
        "Suite: {} passed / {} failed features, {} scenarios, total time {}",
        suite.passed,
        suite.failed,
        suite.scenarios.total(),
        suite.total_time
    );

    Report::new(suite, reports)
}

/// Summarize one feature
///
/// **Private** - a feature without `elements` yields zero scenarios and is not failed
fn summarize_feature(feature_index: usize, feature: &Feature, images: &AttachmentIndex) -> FeatureReport {
    let elements: Vec<ElementReport> = feature
        .elements
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(element_index, element)| {
            summarize_element(feature_index, element_index, element, images)
        })
        .collect();

    let mut scenarios = StatusCounts::default();
    let mut time = 0.0;
    let mut is_failed = false;

    for element in &elements {
        time += element.time;

        // Elements with no counted step fall through every bucket
        if let Some(bucket) = element.classification {
            scenarios.increment(bucket);
            is_failed |= bucket == ResultStatus::Failed;
        }
    }

    FeatureReport {
        name: feature.name.clone(),
        keyword: feature.keyword.clone(),
        uri: feature.uri.clone(),
        description: feature.description.clone(),
        tags: feature.tags.clone(),
        scenarios,
        time,
        is_failed,
        elements,
    }
}

/// Count one element's steps and classify it
///
/// **Private** - steps without a result add nothing to counts or time
fn summarize_element(
    feature_index: usize,
    element_index: usize,
    element: &Element,
    images: &AttachmentIndex,
) -> ElementReport {
    let mut counts = StatusCounts::default();
    let mut time = 0.0;
    let mut steps = Vec::with_capacity(element.steps.len());

    for (step_index, step) in element.steps.iter().enumerate() {
        let image = images
            .get(StepPosition::new(feature_index, element_index, step_index))
            .map(str::to_string);
        steps.push(StepReport::from_step(step, image));

        let Some(result) = &step.result else {
            continue;
        };

        time += result.duration.unwrap_or(0.0);
        counts.increment(result.status());
    }

    ElementReport {
        name: element.name.clone(),
        keyword: element.keyword.clone(),
        description: element.description.clone(),
        kind: element.kind.clone(),
        tags: element.tags.clone(),
        counts,
        time,
        classification: counts.classify(),
        steps,
    }
}
