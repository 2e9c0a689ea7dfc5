//! Loader for employee gross income data.
//!
//! ## File format
//!
//! Headerless CSV, one employee per line:
//!
//! ```text
//! 101,3500
//! 203,5000
//! 309,15000
//! ```
//!
//! | Field | Type | Notes |
//! |----------------|---------|-------------------------------------------|
//! | employee id | string | Must not be empty |
//! | gross income | integer | Whole currency units; `5000.50` is refused |
//!
//! Whitespace around fields is trimmed and blank lines are skipped. Records
//! are returned in file order.

use std::io::Read;
use std::path::{Path, PathBuf};

use payroll_core::EmployeeRecord;
use serde::Deserialize;
use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when loading employee data.
#[derive(Debug, Error)]
pub enum EmployeeLoadError {
    #[error("cannot read employee file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("employee line {line}: expected 'id,gross_income', got {fields} field(s)")]
    FieldCount { line: u64, fields: usize },

    #[error("employee line {line}: employee id is empty")]
    EmptyId { line: u64 },

    #[error("employee line {line}: gross income '{value}' is not a whole number")]
    InvalidIncome { line: u64, value: String },
}

impl EmployeeLoadError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Parameter
    }
}

impl From<csv::Error> for EmployeeLoadError {
    fn from(err: csv::Error) -> Self {
        EmployeeLoadError::CsvParse(err.to_string())
    }
}

/// Serde row mirroring the two CSV columns.
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    id: String,
    gross_income: i64,
}

/// Loader for headerless `id,gross_income` employee files.
pub struct EmployeeLoader;

impl EmployeeLoader {
    /// Parse employee records from a CSV reader, in file order.
    ///
    /// The whole input is validated before anything is returned; the first
    /// bad line aborts the parse.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, EmployeeLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true) // field count is checked per line below
            .from_reader(reader);
        let mut records = Vec::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 1);

            if record.len() != 2 {
                return Err(EmployeeLoadError::FieldCount {
                    line,
                    fields: record.len(),
                });
            }

            let row: EmployeeRow =
                record
                    .deserialize(None)
                    .map_err(|_| EmployeeLoadError::InvalidIncome {
                        line,
                        value: record[1].to_string(),
                    })?;

            if row.id.is_empty() {
                return Err(EmployeeLoadError::EmptyId { line });
            }

            records.push(EmployeeRecord::new(row.id, row.gross_income));
        }

        Ok(records)
    }

    /// Convenience wrapper: open a file and delegate to [`Self::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<EmployeeRecord>, EmployeeLoadError> {
        let file = std::fs::File::open(path).map_err(|source| EmployeeLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const USER_DATA: &str = "\
101,3500
203,5000
309,15000
";

    #[test]
    fn test_parse_records_in_file_order() {
        let records = EmployeeLoader::parse(USER_DATA.as_bytes()).expect("should parse");

        assert_eq!(
            records,
            vec![
                EmployeeRecord::new("101", 3500),
                EmployeeRecord::new("203", 5000),
                EmployeeRecord::new("309", 15000),
            ]
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let records = EmployeeLoader::parse(" 101 ,  6000 \n".as_bytes()).unwrap();

        assert_eq!(records, vec![EmployeeRecord::new("101", 6000)]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let records = EmployeeLoader::parse("101,3500\n\n203,5000\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "203");
    }

    #[test]
    fn test_parse_accepts_missing_trailing_newline() {
        let records = EmployeeLoader::parse("101,3500".as_bytes()).unwrap();

        assert_eq!(records, vec![EmployeeRecord::new("101", 3500)]);
    }

    #[test]
    fn test_parse_keeps_quoted_ids() {
        let records = EmployeeLoader::parse("\"A-7, night shift\",4200\n".as_bytes()).unwrap();

        assert_eq!(records[0].id, "A-7, night shift");
        assert_eq!(records[0].gross_income, 4200);
    }

    #[test]
    fn test_parse_empty_input() {
        let records = EmployeeLoader::parse("".as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_fractional_income_is_rejected() {
        let err = EmployeeLoader::parse("101,3500\n203,5000.50\n".as_bytes()).unwrap_err();

        match err {
            EmployeeLoadError::InvalidIncome { line, ref value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "5000.50");
            }
            ref other => panic!("expected InvalidIncome, got {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Parameter);
    }

    #[test]
    fn test_non_numeric_income_is_rejected() {
        let err = EmployeeLoader::parse("101,lots\n".as_bytes()).unwrap_err();

        assert!(matches!(err, EmployeeLoadError::InvalidIncome { line: 1, .. }));
    }

    #[test]
    fn test_empty_income_is_rejected() {
        let err = EmployeeLoader::parse("101,\n".as_bytes()).unwrap_err();

        assert!(matches!(err, EmployeeLoadError::InvalidIncome { line: 1, .. }));
    }

    #[test]
    fn test_missing_income_field_is_rejected() {
        let err = EmployeeLoader::parse("101,3500\n203\n".as_bytes()).unwrap_err();

        match err {
            EmployeeLoadError::FieldCount { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_field_is_rejected() {
        let err = EmployeeLoader::parse("101,3500,extra\n".as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            EmployeeLoadError::FieldCount { line: 1, fields: 3 }
        ));
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let err = EmployeeLoader::parse(",3500\n".as_bytes()).unwrap_err();

        assert!(matches!(err, EmployeeLoadError::EmptyId { line: 1 }));
    }

    #[test]
    fn test_negative_income_is_accepted() {
        let records = EmployeeLoader::parse("101,-200\n".as_bytes()).unwrap();

        assert_eq!(records[0].gross_income, -200);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err =
            EmployeeLoader::load_from_file(Path::new("/this/path/does/not/exist.csv")).unwrap_err();

        assert!(matches!(err, EmployeeLoadError::Io { .. }));
        assert_eq!(err.kind(), ErrorKind::Parameter);
    }
}
