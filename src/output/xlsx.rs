//! Spreadsheet report.
//!
//! Layout, with 1-based rows and columns as shown in a spreadsheet:
//! - row 2, columns 1-3 (merged): `"<title> results for: <timestamp>"`
//! - from row 5 on, one row per feature (keyword, name), per named
//!   element (keyword, name) and per step with both a result and a name
//!   (status, keyword, name)
//! - a step's free-form text goes in column 4 of the latest row
//!
//! The row layout is computed separately from the writer so it can be
//! checked without reading an `.xlsx` back.

use super::files::{file_size, prepare_output};
use crate::aggregator::report::Report;
use crate::utils::config::{
    SHEET_FIRST_DATA_ROW, SHEET_HEADER_ROW, SHEET_NAME, SHEET_NAME_COLUMN_WIDTH, SHEET_TEXT_COLUMN_WIDTH,
};
use crate::utils::error::OutputError;
use log::{debug, info};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const STATUS_COLUMN: u16 = 1;
const KEYWORD_COLUMN: u16 = 2;
const NAME_COLUMN: u16 = 3;
const TEXT_COLUMN: u16 = 4;

/// One populated spreadsheet row (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub row: u32,
    pub cells: Vec<SheetCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    pub column: u16,
    pub value: String,
}

impl SheetCell {
    fn new(column: u16, value: impl Into<String>) -> Self {
        Self { column, value: value.into() }
    }
}

/// Header line written above the data rows
pub fn sheet_header(title: &str, generated_at: &str) -> String {
    format!("{} results for: {}\n\n", title, generated_at)
}

/// Compute the data rows of the spreadsheet
///
/// **Public** - pure layout, used by `write_xlsx`
///
/// Feature and element rows use columns 1 and 2; step rows use 1-3.
pub fn layout_rows(report: &Report) -> Vec<SheetRow> {
    let mut rows: Vec<SheetRow> = Vec::new();
    let mut current = SHEET_FIRST_DATA_ROW - 1;

    for feature in &report.features {
        current += 1;
        rows.push(SheetRow {
            row: current,
            cells: vec![
                SheetCell::new(STATUS_COLUMN, feature.keyword.clone().unwrap_or_default()),
                SheetCell::new(KEYWORD_COLUMN, feature.name.clone().unwrap_or_default()),
            ],
        });

        for element in &feature.elements {
            if let Some(name) = &element.name {
                current += 1;
                rows.push(SheetRow {
                    row: current,
                    cells: vec![
                        SheetCell::new(STATUS_COLUMN, element.keyword.clone().unwrap_or_default()),
                        SheetCell::new(KEYWORD_COLUMN, name.as_str()),
                    ],
                });
            }

            for step in &element.steps {
                if let (Some(status), Some(name)) = (&step.status, &step.name) {
                    current += 1;
                    rows.push(SheetRow {
                        row: current,
                        cells: vec![
                            SheetCell::new(STATUS_COLUMN, status.as_str()),
                            SheetCell::new(KEYWORD_COLUMN, step.keyword.clone().unwrap_or_default()),
                            SheetCell::new(NAME_COLUMN, name.as_str()),
                        ],
                    });
                }

                // Text lands on whatever row was written last, even a feature row
                if let (Some(text), Some(last)) = (&step.text, rows.last_mut()) {
                    last.cells.retain(|cell| cell.column != TEXT_COLUMN);
                    last.cells.push(SheetCell::new(TEXT_COLUMN, text.as_str()));
                }
            }
        }
    }

    debug!("Laid out {} spreadsheet rows", rows.len());

    rows
}

/// Write the spreadsheet report to `output_path`
///
/// **Public** - main entry point for XLSX output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::SpreadsheetFailed` - Workbook construction or save error
pub fn write_xlsx(report: &Report, title: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing spreadsheet report to: {}", output_path.display());

    prepare_output(output_path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(KEYWORD_COLUMN - 1, SHEET_NAME_COLUMN_WIDTH)?;
    worksheet.set_column_width(NAME_COLUMN - 1, SHEET_TEXT_COLUMN_WIDTH)?;

    let header_row = SHEET_HEADER_ROW - 1;
    worksheet.merge_range(
        header_row,
        STATUS_COLUMN - 1,
        header_row,
        NAME_COLUMN - 1,
        &sheet_header(title, &report.generated_at),
        &Format::new().set_text_wrap(),
    )?;

    for row in layout_rows(report) {
        for cell in &row.cells {
            worksheet.write_string(row.row - 1, cell.column - 1, cell.value.as_str())?;
        }
    }

    workbook.save(output_path)?;

    info!("Spreadsheet written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::parse_results;
    use pretty_assertions::assert_eq;

    fn row(row: u32, cells: &[(u16, &str)]) -> SheetRow {
        SheetRow {
            row,
            cells: cells.iter().map(|(c, v)| SheetCell::new(*c, *v)).collect(),
        }
    }

    #[test]
    fn test_layout_rows() {
        let features = parse_results(
            r#"[{"keyword":"Feature","name":"Login","elements":[
                {"keyword":"Scenario","name":"Valid user","steps":[
                    {"keyword":"Given ","name":"a user","result":{"status":"passed"}},
                    {"keyword":"When ","name":"no result"},
                    {"keyword":"Then ","name":"weird","result":{"status":"weirdstatus"},"text":"note"}
                ]},
                {"keyword":"Background","steps":[
                    {"keyword":"Given ","result":{"status":"passed"},"text":"unnamed step"}
                ]}
            ]}]"#,
        )
        .unwrap();

        let rows = layout_rows(&aggregate(&features));

        // The unnamed background adds no rows; its step text overwrites row 8
        assert_eq!(
            rows,
            vec![
                row(5, &[(1, "Feature"), (2, "Login")]),
                row(6, &[(1, "Scenario"), (2, "Valid user")]),
                row(7, &[(1, "passed"), (2, "Given "), (3, "a user")]),
                row(8, &[(1, "weirdstatus"), (2, "Then "), (3, "weird"), (4, "unnamed step")]),
            ]
        );
    }

    #[test]
    fn test_layout_feature_without_elements() {
        let features = parse_results(r#"[{"keyword":"Feature","name":"A"},{"name":"B"}]"#).unwrap();

        let rows = layout_rows(&aggregate(&features));

        assert_eq!(
            rows,
            vec![row(5, &[(1, "Feature"), (2, "A")]), row(6, &[(1, ""), (2, "B")])]
        );
    }

    #[test]
    fn test_sheet_header() {
        assert_eq!(
            sheet_header("Protractor", "2024-01-01 10:00:00"),
            "Protractor results for: 2024-01-01 10:00:00\n\n"
        );
    }

    #[test]
    fn test_write_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.xlsx");
        let features = parse_results(
            r#"[{"keyword":"Feature","name":"A","elements":[{"name":"S","steps":[{"name":"s","result":{"status":"passed"}}]}]}]"#,
        )
        .unwrap();

        write_xlsx(&aggregate(&features), "Protractor", &path).unwrap();

        assert!(path.exists());
        assert!(file_size(&path) > 0);
    }
}
