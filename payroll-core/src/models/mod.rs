mod amount;
mod employee;
mod payroll_result;
mod social_insurance;
mod tax_bracket;
mod tax_table;

pub use amount::{MAX_AMOUNT, within_limit};
pub use employee::EmployeeRecord;
pub use payroll_result::PayrollResult;
pub use social_insurance::{ContributionRates, SocialInsuranceConfig, SocialInsuranceConfigError};
pub use tax_bracket::TaxBracket;
pub use tax_table::{STANDARD_EXEMPTION_THRESHOLD, TaxTable, TaxTableError};
