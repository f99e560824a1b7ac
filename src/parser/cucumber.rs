//! Loader for Cucumber JSON result documents.
//!
//! A result document is a JSON array of features. Loading is the only
//! fallible part of the input side: a missing or malformed document aborts
//! the run before any report is written.

use super::schema::Feature;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a result document from a JSON string
///
/// **Public** - main entry point for in-memory documents
///
/// # Errors
/// * `ParseError::JsonError` - Not a JSON array of feature objects
pub fn parse_results(raw: &str) -> Result<Vec<Feature>, ParseError> {
    let features: Vec<Feature> = serde_json::from_str(raw)?;
    debug!("Parsed {} features", features.len());
    Ok(features)
}

/// Read a result document from disk
///
/// **Public** - used by the generate and validate commands
///
/// # Errors
/// * `ParseError::ReadFailed` - File cannot be opened
/// * `ParseError::JsonError` - Invalid document
pub fn read_results(input_path: impl AsRef<Path>) -> Result<Vec<Feature>, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading results from: {}", input_path.display());

    let file = File::open(input_path)?;
    let features: Vec<Feature> = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Loaded {} features, {} elements",
        features.len(),
        features
            .iter()
            .map(|f| f.elements.as_ref().map_or(0, Vec::len))
            .sum::<usize>()
    );

    Ok(features)
}
