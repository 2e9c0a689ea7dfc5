//! Per-employee withholding pipeline.
//!
//! For each [`EmployeeRecord`]:
//!
//! 1. social insurance from the clamped contribution base
//! 2. taxable income = gross - social insurance - exemption threshold
//! 3. income tax from the bracket table
//! 4. net income = gross - social insurance - tax
//!
//! Records are independent of each other; [`PayrollCalculator::process_all`]
//! returns results in input order.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::{EmployeeRecord, PayrollCalculator, SocialInsuranceConfig, TaxTable};
//!
//! let config = SocialInsuranceConfig {
//!     base_low: dec!(3000),
//!     base_high: dec!(25000),
//!     total_rate: dec!(0.105),
//! };
//! let table = TaxTable::standard();
//! let calculator = PayrollCalculator::new(&config, &table);
//!
//! let result = calculator.process(&EmployeeRecord::new("101", 6000));
//!
//! assert_eq!(result.social_insurance, dec!(630));
//! assert_eq!(result.tax, dec!(82));
//! assert_eq!(result.net_income, dec!(5288));
//! ```

use tracing::debug;

use crate::calculations::income_tax::{compute_tax, taxable_income};
use crate::calculations::social_insurance::compute_social_insurance;
use crate::{EmployeeRecord, PayrollResult, SocialInsuranceConfig, TaxTable};

/// Applies one social insurance configuration and one tax table to
/// employee records.
#[derive(Debug, Clone, Copy)]
pub struct PayrollCalculator<'a> {
    config: &'a SocialInsuranceConfig,
    table: &'a TaxTable,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(
        config: &'a SocialInsuranceConfig,
        table: &'a TaxTable,
    ) -> Self {
        Self { config, table }
    }

    /// Computes the withholding for a single employee.
    pub fn process(
        &self,
        employee: &EmployeeRecord,
    ) -> PayrollResult {
        let gross_income = employee.gross_income_decimal();
        let social_insurance = compute_social_insurance(gross_income, self.config);
        let taxable = taxable_income(
            gross_income,
            social_insurance,
            self.table.exemption_threshold(),
        );
        let tax = compute_tax(taxable, self.table.brackets());
        let net_income = gross_income - social_insurance - tax;

        debug!(
            id = %employee.id,
            gross_income = %gross_income,
            social_insurance = %social_insurance,
            taxable_income = %taxable,
            tax = %tax,
            net_income = %net_income,
            "computed payroll"
        );

        PayrollResult {
            id: employee.id.clone(),
            gross_income,
            social_insurance,
            tax,
            net_income,
        }
    }

    /// Computes withholding for every record, preserving input order.
    pub fn process_all(
        &self,
        employees: &[EmployeeRecord],
    ) -> Vec<PayrollResult> {
        employees.iter().map(|e| self.process(e)).collect()
    }
}

/// Convenience wrapper around [`PayrollCalculator::process`].
pub fn process(
    employee: &EmployeeRecord,
    config: &SocialInsuranceConfig,
    table: &TaxTable,
) -> PayrollResult {
    PayrollCalculator::new(config, table).process(employee)
}
