//! Loader for a replacement tax bracket table.
//!
//! Runs without a table file use [`TaxTable::standard`]. A table file is TOML
//! with the exemption threshold and one `[[brackets]]` entry per row, listed
//! highest threshold first and ending with a bracket at 0:
//!
//! ```toml
//! exemption_threshold = 5000
//!
//! [[brackets]]
//! threshold = 80000
//! rate = 0.45
//! quick_subtractor = 15160
//!
//! # ...
//!
//! [[brackets]]
//! threshold = 0
//! rate = 0.03
//! quick_subtractor = 0
//! ```

use std::path::{Path, PathBuf};

use payroll_core::{TaxBracket, TaxTable, TaxTableError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::ErrorKind;

/// Errors that can occur when loading a tax table file.
#[derive(Debug, Error)]
pub enum TaxTableLoadError {
    #[error("cannot read tax table '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid tax table: {0}")]
    Invalid(#[from] TaxTableError),
}

impl TaxTableLoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Parameter,
            Self::TomlParse(_) | Self::Invalid(_) => ErrorKind::Config,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaxTableFile {
    exemption_threshold: Decimal,
    brackets: Vec<TaxBracket>,
}

/// Loader for TOML tax table files.
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parse and validate a table from TOML text.
    ///
    /// Boundaries where the quick subtractors leave a jump in the tax are
    /// logged but not rejected.
    pub fn parse(input: &str) -> Result<TaxTable, TaxTableLoadError> {
        let file: TaxTableFile = toml::from_str(input)?;
        let table = TaxTable::new(file.brackets, file.exemption_threshold)?;

        for (threshold, gap) in table.discontinuities() {
            warn!(
                threshold = %threshold,
                gap = %gap,
                "tax jumps at bracket boundary; check the quick subtractor"
            );
        }

        Ok(table)
    }

    /// Read a table file from disk and delegate to [`Self::parse`].
    pub fn load_from_file(path: &Path) -> Result<TaxTable, TaxTableLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TaxTableLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }
}
