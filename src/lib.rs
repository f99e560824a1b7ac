//! Cuke Report
//!
//! Statistics and reports for Cucumber JSON test results.
//!
//! A result document is parsed into features, elements (scenarios) and
//! steps, aggregated into per-element, per-feature and suite-wide counts,
//! and rendered as an HTML page, an XLSX spreadsheet or annotated JSON.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install cuke-report
//! cuke-report generate --input e2e/results.json --format html --format xlsx
//! ```
//!
//! Library use:
//!
//! ```ignore
//! let features = cuke_report::parser::read_results("e2e/results.json")?;
//! let report = cuke_report::aggregator::aggregate(&features);
//! println!("{} failed features", report.suite.failed);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
