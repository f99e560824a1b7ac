//! Generate command implementation.
//!
//! The generate command:
//! 1. Resolves configuration (file + CLI overrides)
//! 2. Reads the result document
//! 3. Materializes embedded screenshots
//! 4. Aggregates statistics
//! 5. Writes each requested report

use super::models::{GenerateArgs, GenerateOutcome};
use crate::aggregator::{aggregate_with_attachments, collect_attachments};
use crate::output::{render_summary, write_html, write_report_json, write_xlsx, ScreenshotWriter};
use crate::parser::read_results;
use crate::utils::config::{load_config, OutputFormat, ReportConfig};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or invalid config file
/// * Missing or unreadable result document
/// * Screenshot or report write failures
///
/// # Example
/// ```ignore
/// let args = GenerateArgs {
///     input: Some(PathBuf::from("e2e/results.json")),
///     formats: vec!["html".to_string(), "xlsx".to_string()],
///     ..Default::default()
/// };
///
/// execute_generate(args)?;
/// ```
pub fn execute_generate(args: GenerateArgs) -> Result<GenerateOutcome> {
    let start_time = Instant::now();

    // Step 1: Resolve configuration
    info!("Step 1/5: Resolving configuration...");
    let config = resolve_config(&args)?;
    let input = config.input_path()?;
    let formats = config.formats();

    debug!("Resolved config: {:?}", config);
    if formats.is_empty() {
        warn!("No recognized report format requested; only statistics will be computed");
    }

    // Step 2: Read results
    info!("Step 2/5: Reading results from {}...", input.display());
    let features = read_results(input)
        .with_context(|| format!("Failed to read result document {}", input.display()))?;

    // Step 3: Screenshots
    info!("Step 3/5: Materializing screenshots...");
    let mut screenshots = ScreenshotWriter::new(&config.screenshots_dir);
    let attachments = collect_attachments(&features, &mut screenshots)
        .context("Failed to write screenshots")?;

    debug!(
        "Wrote {} screenshot files for {} steps",
        screenshots.written(),
        attachments.len()
    );

    // Step 4: Aggregate
    info!("Step 4/5: Aggregating statistics...");
    let report = aggregate_with_attachments(&features, &attachments);

    info!(
        "{} features ({} passed, {} failed), {} scenarios",
        report.suite.features(),
        report.suite.passed,
        report.suite.failed,
        report.suite.scenarios.total()
    );

    // Step 5: Write reports
    info!("Step 5/5: Writing {} reports...", formats.len());
    let mut written = Vec::with_capacity(formats.len());

    for format in formats {
        let path = config.output_path(format);
        match format {
            OutputFormat::Html => write_html(&report, &path).context("Failed to write HTML report")?,
            OutputFormat::Xlsx => write_xlsx(&report, &config.title, &path)
                .context("Failed to write spreadsheet report")?,
            OutputFormat::Json => {
                write_report_json(&report, &path).context("Failed to write JSON report")?
            }
        }
        info!("✓ Report written to: {}", path.display());
        written.push(path);
    }

    if args.print_summary {
        println!("{}", render_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Generate completed in {:.2}s", elapsed.as_secs_f64());

    Ok(GenerateOutcome {
        report,
        written,
        screenshots: screenshots.written(),
    })
}

/// Merge the config file (if any) with CLI overrides
///
/// **Public** - exposed for validation and testing
pub fn resolve_config(args: &GenerateArgs) -> Result<ReportConfig> {
    let mut config = match &args.config_file {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if !args.formats.is_empty() {
        config.format = args.formats.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(dir) = &args.screenshots_dir {
        config.screenshots_dir = dir.clone();
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }

    Ok(config)
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.config_file.is_none() && args.input.is_none() {
        anyhow::bail!("Either --config or --input must be given");
    }

    if let Some(input) = &args.input {
        if input.as_os_str().is_empty() {
            anyhow::bail!("Input path cannot be empty");
        }
    }

    if let Some(title) = &args.title {
        if title.trim().is_empty() {
            anyhow::bail!("Title cannot be empty");
        }
    }

    Ok(())
}
