//! File boundary of the payroll run: reads the social insurance
//! configuration, employee data and an optional tax table, and writes the
//! computed results.

mod error;

pub mod config_loader;
pub mod employee_loader;
pub mod tax_table_loader;
pub mod writer;

pub use config_loader::{ConfigLoadError, ConfigValues, SocialInsuranceConfigLoader};
pub use employee_loader::{EmployeeLoadError, EmployeeLoader};
pub use error::ErrorKind;
pub use tax_table_loader::{TaxTableLoadError, TaxTableLoader};
pub use writer::{ResultWriteError, ResultWriter};
