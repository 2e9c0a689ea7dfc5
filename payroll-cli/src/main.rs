use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use payroll_cli::app::{self, RunOptions};
use payroll_cli::logging::{self, LogSettings};

// --- CLI definition ---

/// Monthly income tax and net pay calculator.
///
/// Reads a social insurance configuration and a list of employee gross
/// incomes, and writes each employee's social insurance, income tax and net
/// pay. Nothing is written unless every input line is valid.
#[derive(Debug, Parser)]
#[command(name = "payroll", version)]
struct Cli {
    /// Social insurance configuration file (`key = value` lines).
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Employee data file (`id,gross_income` lines).
    #[arg(short = 'd', long = "userdata")]
    userdata: PathBuf,

    /// Output file for the computed results.
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// TOML tax table replacing the built-in schedule and exemption.
    #[arg(long)]
    tax_table: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,payroll_core=debug`.
    /// Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            config: self.config.clone(),
            userdata: self.userdata.clone(),
            output: self.output.clone(),
            tax_table: self.tax_table.clone(),
        }
    }
}

// --- Entry point ---

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(LogSettings {
        level: cli.log_level.as_deref(),
        file: cli.log_file.as_deref(),
    })
    .context("failed to initialise logging")?;

    match app::run(&cli.run_options()) {
        Ok(summary) => {
            info!(
                employees = summary.employees,
                "payroll complete: {}",
                summary.output.display()
            );
            Ok(())
        }
        Err(err) => {
            error!(kind = %err.kind(), error = %err, "payroll run aborted");
            Err(err).context("payroll run aborted; no results written")
        }
    }
}
