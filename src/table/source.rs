//! Loading tables from JSON documents.
//!
//! Two document shapes are accepted:
//!
//! ```json
//! { "columns": ["Location", "Magnitude"], "rows": [["Chile", 6.1]] }
//! ```
//!
//! or a list of earthquake records as published by the tracker:
//!
//! ```json
//! [{ "date": "2024-01-01", "location": "Noto", "magnitude": 7.5,
//!    "deaths": 0, "injured": 0, "refUrl": "https://example.com/quake" }]
//! ```
//!
//! Every cell ends up as text; numbers and booleans in a grid are
//! stringified with their JSON spelling.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use serde_json::Value;

use super::{Cell, Row, Table};
use crate::error::TableError;

/// Column headings used for record documents.
pub const RECORD_COLUMNS: [&str; 6] = [
    "Date",
    "Location",
    "Magnitude",
    "Deaths",
    "Injured",
    "Source",
];

/// Placeholder the tracker stores when a field could not be determined.
const UNKNOWN: &str = "unknown";

/// A single earthquake report.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuakeRecord {
    /// Stable identifier of the report.
    pub id: String,
    /// Day the report was last refreshed.
    pub last_updated: String,
    /// Number of people injured.
    pub injured: i64,
    /// Number of deaths.
    pub deaths: i64,
    /// Reported magnitude.
    pub magnitude: f64,
    /// Human-readable location.
    pub location: String,
    /// Date of the earthquake (`YYYY-MM-DD`).
    pub date: String,
    /// Article the report was extracted from.
    pub ref_url: String,
}

impl QuakeRecord {
    /// Returns true when the record lacks a magnitude, date, or location.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.magnitude.abs() < f64::EPSILON || self.date == UNKNOWN || self.location == UNKNOWN
    }

    fn to_row(&self) -> Row {
        [
            self.date.clone(),
            self.location.clone(),
            self.magnitude.to_string(),
            self.deaths.to_string(),
            self.injured.to_string(),
            self.ref_url.clone(),
        ]
        .into_iter()
        .collect()
    }
}

/// A table document in either supported shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableSource {
    /// Explicit column headings and rows of cell values.
    Grid {
        /// Header cell text.
        columns: Vec<String>,
        /// Data rows; each inner list is one row of cell values.
        #[serde(default)]
        rows: Vec<Vec<Value>>,
    },
    /// A list of earthquake records.
    Records(Vec<QuakeRecord>),
}

impl TableSource {
    /// Converts the document into a table with every row shown.
    ///
    /// Incomplete records are dropped.
    #[must_use]
    pub fn into_table(self) -> Table {
        match self {
            Self::Grid { columns, rows } => {
                let header = columns.into_iter().collect();
                let data = rows
                    .into_iter()
                    .map(|values| values.iter().map(cell_from_json).collect())
                    .collect();
                Table::new(header, data)
            }
            Self::Records(records) => {
                let total = records.len();
                let data: Vec<Row> = records
                    .iter()
                    .filter(|record| !record.is_incomplete())
                    .map(QuakeRecord::to_row)
                    .collect();
                let discarded = total.saturating_sub(data.len());
                if discarded > 0 {
                    tracing::debug!(discarded, "dropped incomplete earthquake records");
                }
                Table::new(RECORD_COLUMNS.into_iter().collect(), data)
            }
        }
    }
}

fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::String(text) => Cell::new(text.as_str()),
        Value::Null => Cell::default(),
        other => Cell::new(other.to_string()),
    }
}

/// Parses a table document.
///
/// # Errors
///
/// Returns [`TableError::Parse`] when the text is not a supported document.
pub fn parse_table(document: &str) -> Result<Table, TableError> {
    let source: TableSource =
        serde_json::from_str(document).map_err(|error| TableError::Parse {
            message: error.to_string(),
        })?;
    let table = source.into_table();
    tracing::debug!(
        columns = table.header().cells().len(),
        rows = table.len(),
        "parsed table document"
    );
    Ok(table)
}

/// Reads and parses the table document at `path`.
///
/// # Errors
///
/// Returns [`TableError::Io`] when the file cannot be read and
/// [`TableError::Parse`] when its contents are not a supported document.
pub fn load_table(path: &Utf8Path) -> Result<Table, TableError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| TableError::Io {
        message: format!("invalid table path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| TableError::Io {
        message: format!("failed to open table directory '{parent}': {error}"),
    })?;
    let content = dir
        .read_to_string(file_name)
        .map_err(|error| TableError::Io {
            message: format!("failed to read table document '{path}': {error}"),
        })?;

    parse_table(&content)
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[rstest]
    fn grid_document_stringifies_values() -> TestResult {
        let table = parse_table(
            r#"{"columns": ["Location", "Magnitude", "Felt", "Notes"],
                "rows": [["Chile", 6.1, true, null]]}"#,
        )?;

        let row = table.rows().first().ok_or("expected one row")?;
        let texts: Vec<&str> = row.cells().iter().map(Cell::text).collect();
        assert_eq!(texts, vec!["Chile", "6.1", "true", ""]);
        assert_eq!(table.header().cells().len(), 4);
        Ok(())
    }

    #[rstest]
    fn grid_without_rows_is_an_empty_table() -> TestResult {
        let table = parse_table(r#"{"columns": ["Location"]}"#)?;
        assert!(table.is_empty());
        Ok(())
    }

    #[rstest]
    fn record_document_uses_fixed_columns_and_drops_incomplete() -> TestResult {
        let table = parse_table(
            r#"[
                {"id": "a", "date": "2024-01-01", "location": "Noto", "magnitude": 7.5,
                 "deaths": 3, "injured": 12, "refUrl": "https://example.com/noto"},
                {"id": "b", "date": "unknown", "location": "Fiji", "magnitude": 5.0},
                {"id": "c", "date": "2024-02-02", "location": "unknown", "magnitude": 4.0},
                {"id": "d", "date": "2024-03-03", "location": "Tonga", "magnitude": 0}
            ]"#,
        )?;

        let header: Vec<&str> = table.header().cells().iter().map(Cell::text).collect();
        assert_eq!(header, RECORD_COLUMNS.to_vec());
        assert_eq!(table.len(), 1);
        let row = table.rows().first().ok_or("expected one row")?;
        let texts: Vec<&str> = row.cells().iter().map(Cell::text).collect();
        assert_eq!(
            texts,
            vec!["2024-01-01", "Noto", "7.5", "3", "12", "https://example.com/noto"]
        );
        Ok(())
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::wrong_shape(r#"{"rows": []}"#)]
    fn malformed_documents_are_parse_errors(#[case] document: &str) {
        let result = parse_table(document);
        assert!(
            matches!(result, Err(TableError::Parse { .. })),
            "expected parse error, got {result:?}"
        );
    }

    #[rstest]
    fn load_table_reads_from_disk() -> TestResult {
        let temp_dir = TempDir::new()?;
        let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .map_err(|_| "temp directory path must be UTF-8")?;
        let dir = Dir::open_ambient_dir(&base, ambient_authority())?;
        dir.write("quakes.json", r#"{"columns": ["A"], "rows": [["x"], ["y"]]}"#)?;

        let table = load_table(&base.join("quakes.json"))?;
        assert_eq!(table.column_texts(0), vec!["x", "y"]);
        Ok(())
    }

    #[rstest]
    fn load_table_reports_missing_file() -> TestResult {
        let temp_dir = TempDir::new()?;
        let base = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .map_err(|_| "temp directory path must be UTF-8")?;

        let result = load_table(&base.join("missing.json"));
        assert!(matches!(result, Err(TableError::Io { .. })));
        Ok(())
    }
}
