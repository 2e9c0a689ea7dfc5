//! Writer for computed payroll results.
//!
//! Output is headerless CSV, one line per employee in input order:
//!
//! ```text
//! id,gross_income,social_insurance,tax,net_income
//! ```
//!
//! Gross income is written as read; the other amounts are rounded half-up
//! to two decimal places.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use payroll_core::PayrollResult;
use payroll_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::ErrorKind;

/// Errors that can occur when writing results.
#[derive(Debug, Error)]
pub enum ResultWriteError {
    #[error("cannot write results to '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot flush results: {0}")]
    Flush(#[from] std::io::Error),
}

impl ResultWriteError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Io
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Formats one result as its output fields.
pub fn result_fields(result: &PayrollResult) -> [String; 5] {
    [
        result.id.clone(),
        result.gross_income.normalize().to_string(),
        money(result.social_insurance),
        money(result.tax),
        money(result.net_income),
    ]
}

/// Writer for payroll result files.
pub struct ResultWriter;

impl ResultWriter {
    /// Write every result to `writer`, in order.
    pub fn write<W: Write>(
        writer: W,
        results: &[PayrollResult],
    ) -> Result<(), ResultWriteError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for result in results {
            csv_writer.write_record(result_fields(result))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Format all results in memory, write them to a sibling temporary file,
    /// then rename it over `path`.
    ///
    /// `path` either keeps its previous contents or receives the complete
    /// result set; a failed write never leaves a truncated file.
    pub fn write_to_file(
        path: &Path,
        results: &[PayrollResult],
    ) -> Result<(), ResultWriteError> {
        let mut buffer = Vec::new();
        Self::write(&mut buffer, results)?;

        let io_error = |source| ResultWriteError::Io {
            path: path.to_path_buf(),
            source,
        };
        let staging = staging_path(path).map_err(io_error)?;

        let written = fs::write(&staging, buffer).and_then(|()| fs::rename(&staging, path));
        if let Err(source) = written {
            // Best effort; the original error is the one worth reporting.
            let _ = fs::remove_file(&staging);
            return Err(io_error(source));
        }
        Ok(())
    }
}

/// `dir/.name.tmp` next to `path`, so the final rename stays on one
/// filesystem.
fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}
