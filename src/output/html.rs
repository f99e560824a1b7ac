//! HTML report rendering.
//!
//! Two Liquid templates are compiled into the binary: a features partial,
//! rendered first, and the index page that embeds it. Both receive the
//! serialized [`Report`] (`generated_at`, `suite`, `features`).

use super::files::{file_size, prepare_output};
use crate::aggregator::report::Report;
use crate::utils::error::OutputError;
use liquid::model::Value;
use log::{debug, info};
use std::fs;
use std::path::Path;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const FEATURES_TEMPLATE: &str = include_str!("templates/features.html");

/// Render the report to an HTML page
///
/// **Public** - pure rendering, no I/O
///
/// # Errors
/// * `OutputError::TemplateFailed` - Template parse, conversion or render error
pub fn render_html(report: &Report) -> Result<String, OutputError> {
    let parser = liquid::ParserBuilder::with_stdlib().build()?;
    let mut globals = liquid::to_object(report)?;

    let features_html = parser.parse(FEATURES_TEMPLATE)?.render(&globals)?;
    debug!("Rendered features partial ({} bytes)", features_html.len());

    globals.insert("features_html".into(), Value::scalar(features_html));

    Ok(parser.parse(INDEX_TEMPLATE)?.render(&globals)?)
}

/// Render the report and write it to `output_path`
///
/// **Public** - main entry point for HTML output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::TemplateFailed` - Rendering error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_html(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML report to: {}", output_path.display());

    prepare_output(output_path)?;

    let page = render_html(report)?;
    fs::write(output_path, page)?;

    info!("HTML report written successfully ({} bytes)", file_size(output_path));

    Ok(())
}
