//! Output writers for reports and screenshots.
//!
//! This module handles writing data to disk in various formats:
//! - HTML report (Liquid templates)
//! - XLSX spreadsheet
//! - JSON annotated report
//! - Decoded screenshots
//! - Text summaries

pub mod files;
pub mod html;
pub mod json;
pub mod screenshots;
pub mod summary;
pub mod xlsx;

// Re-export main functions
pub use files::{directory_exists, ensure_directory, validate_path};
pub use html::{render_html, write_html};
pub use json::{read_report_json, write_report_json};
pub use screenshots::ScreenshotWriter;
pub use summary::render_summary;
pub use xlsx::{layout_rows, sheet_header, write_xlsx, SheetCell, SheetRow};
