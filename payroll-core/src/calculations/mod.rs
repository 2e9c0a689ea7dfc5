//! Withholding calculations.
//!
//! Social insurance and income tax are pure functions of their inputs;
//! [`PayrollCalculator`] strings them together per employee.

pub mod common;
pub mod income_tax;
pub mod payroll;
pub mod social_insurance;

pub use income_tax::{compute_tax, find_bracket, taxable_income};
pub use payroll::{PayrollCalculator, process};
pub use social_insurance::{compute_social_insurance, contribution_base};
