//! Configuration and constants for the CLI.
//!
//! A run is described by a small config file, TOML or JSON:
//!
//! ```toml
//! input = "e2e/results.json"
//! format = ["html", "xlsx"]
//! ```

use super::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory the rendered reports are written to
pub const DEFAULT_OUTPUT_DIR: &str = "./e2e/output";

/// Directory decoded screenshots are written to
pub const DEFAULT_SCREENSHOTS_DIR: &str = "./screenshots";

/// Prefix of the spreadsheet header line
pub const DEFAULT_TITLE: &str = "Protractor";

pub const HTML_REPORT_FILE: &str = "report.html";
pub const XLSX_REPORT_FILE: &str = "report.xlsx";
pub const JSON_REPORT_FILE: &str = "report.json";

/// Extension used for every materialized screenshot
pub const SCREENSHOT_EXTENSION: &str = "png";

/// Screenshot stem used when a scenario has no name
pub const UNNAMED_SCENARIO: &str = "unnamed";

// Spreadsheet layout (1-based, as in the sheet itself)
pub const SHEET_NAME: &str = "Sheet 1";
pub const SHEET_HEADER_ROW: u32 = 2;
pub const SHEET_FIRST_DATA_ROW: u32 = 5;
pub const SHEET_NAME_COLUMN_WIDTH: f64 = 20.0;
pub const SHEET_TEXT_COLUMN_WIDTH: f64 = 40.0;

/// Report kinds that can be requested in `format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Html,
    Xlsx,
    Json,
}

impl OutputFormat {
    /// Parse a `format` entry. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "html" => Some(Self::Html),
            "xlsx" => Some(Self::Xlsx),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Fixed file name of this report inside the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Html => HTML_REPORT_FILE,
            Self::Xlsx => XLSX_REPORT_FILE,
            Self::Json => JSON_REPORT_FILE,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Path to the Cucumber JSON result document
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Requested reports, in the order they are produced
    #[serde(default)]
    pub format: Vec<String>,

    /// Where rendered reports go
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Where decoded screenshots go
    #[serde(default = "default_screenshots_dir")]
    pub screenshots_dir: PathBuf,

    /// Header prefix for the spreadsheet
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_screenshots_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SCREENSHOTS_DIR)
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: None,
            format: Vec::new(),
            output_dir: default_output_dir(),
            screenshots_dir: default_screenshots_dir(),
            title: default_title(),
        }
    }
}

impl ReportConfig {
    /// The configured input path, required for every run
    pub fn input_path(&self) -> Result<&Path, ConfigError> {
        self.input.as_deref().ok_or(ConfigError::MissingInput)
    }

    /// Recognized formats in request order, duplicates removed.
    ///
    /// Unrecognized entries are dropped silently.
    pub fn formats(&self) -> Vec<OutputFormat> {
        let mut formats = Vec::new();
        for raw in &self.format {
            match OutputFormat::parse(raw) {
                Some(format) if !formats.contains(&format) => formats.push(format),
                Some(_) => {}
                None => debug!("Ignoring unrecognized report format: {}", raw),
            }
        }
        formats
    }

    /// Full path of the given report inside the output directory
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        self.output_dir.join(format.file_name())
    }
}

/// Load configuration from a TOML or JSON file
///
/// Files ending in `.json` are read as JSON, anything else as TOML.
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::TomlError` / `ConfigError::JsonError` - If contents are invalid
///
/// # Example
/// ```ignore
/// let config = load_config("cuke-report.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let config = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    Ok(config)
}
