//! The payroll run: load inputs, compute every employee, write results.
//!
//! Every input is loaded and validated before the first calculation, and
//! every calculation finishes before the output file is touched, so a
//! failing run never leaves partial output.

use std::path::PathBuf;

use payroll_core::{PayrollCalculator, TaxTable};
use payroll_data::{
    ConfigLoadError, EmployeeLoadError, EmployeeLoader, ErrorKind, ResultWriteError,
    ResultWriter, SocialInsuranceConfigLoader, TaxTableLoadError, TaxTableLoader,
};
use thiserror::Error;
use tracing::{debug, info};

/// File locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Social insurance `key = value` configuration.
    pub config: PathBuf,

    /// Headerless `id,gross_income` employee data.
    pub userdata: PathBuf,

    /// Where results are written.
    pub output: PathBuf,

    /// Replacement tax table; the standard schedule is used when absent.
    pub tax_table: Option<PathBuf>,
}

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}: {}", .0.kind(), .0)]
    Config(#[from] ConfigLoadError),

    #[error("{}: {}", .0.kind(), .0)]
    TaxTable(#[from] TaxTableLoadError),

    #[error("{}: {}", .0.kind(), .0)]
    Employees(#[from] EmployeeLoadError),

    #[error("{}: {}", .0.kind(), .0)]
    Output(#[from] ResultWriteError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::TaxTable(e) => e.kind(),
            Self::Employees(e) => e.kind(),
            Self::Output(e) => e.kind(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub employees: usize,
    pub output: PathBuf,
}

/// Executes one payroll run.
///
/// The configuration (and tax table, if any) is loaded before the employee
/// file is opened, so configuration errors are reported without reading
/// employee data.
///
/// # Errors
///
/// Returns [`AppError`] for the first input, validation, or write failure.
pub fn run(options: &RunOptions) -> Result<RunSummary, AppError> {
    let config = SocialInsuranceConfigLoader::load_from_file(&options.config)?;
    debug!(
        base_low = %config.base_low,
        base_high = %config.base_high,
        total_rate = %config.total_rate,
        "loaded social insurance config from {}",
        options.config.display()
    );

    let table = match &options.tax_table {
        Some(path) => {
            let table = TaxTableLoader::load_from_file(path)?;
            info!(
                brackets = table.brackets().len(),
                exemption = %table.exemption_threshold(),
                "using tax table from {}",
                path.display()
            );
            table
        }
        None => TaxTable::standard(),
    };

    let employees = EmployeeLoader::load_from_file(&options.userdata)?;
    info!(
        count = employees.len(),
        "loaded employees from {}",
        options.userdata.display()
    );

    let results = PayrollCalculator::new(&config, &table).process_all(&employees);

    ResultWriter::write_to_file(&options.output, &results)?;
    info!(
        count = results.len(),
        "wrote results to {}",
        options.output.display()
    );

    Ok(RunSummary {
        employees: results.len(),
        output: options.output.clone(),
    })
}
