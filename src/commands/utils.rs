use crate::aggregator::aggregate;
use crate::output::render_summary;
use crate::parser::read_results;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a result document and print its statistics
pub fn validate_results_file(file_path: &Path) -> Result<()> {
    println!("Validating results: {}", file_path.display());

    let features = read_results(file_path)
        .with_context(|| format!("Failed to read result document {}", file_path.display()))?;
    let report = aggregate(&features);

    println!("✓ Valid result document");
    println!("  Features:  {}", report.suite.features());
    println!("  Scenarios: {}", report.suite.scenarios.total());
    println!("{}", render_summary(&report));

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Cuke Report v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Statistics, HTML and spreadsheet reports from Cucumber JSON results.");
}
