use std::path::PathBuf;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args.
/// Every field set here overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Config file (TOML or JSON)
    pub config_file: Option<PathBuf>,

    /// Cucumber JSON result document
    pub input: Option<PathBuf>,

    /// Requested report formats; replaces the configured list when non-empty
    pub formats: Vec<String>,

    /// Directory for rendered reports
    pub output_dir: Option<PathBuf>,

    /// Directory for decoded screenshots
    pub screenshots_dir: Option<PathBuf>,

    /// Spreadsheet header prefix
    pub title: Option<String>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

/// What a generate run produced
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub report: crate::aggregator::Report,

    /// Report files written, in format order
    pub written: Vec<PathBuf>,

    /// Number of screenshot files written
    pub screenshots: usize,
}
