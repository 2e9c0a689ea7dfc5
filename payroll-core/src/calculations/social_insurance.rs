//! Social insurance withholding.
//!
//! The contribution base is the gross income limited to the configured
//! `[base_low, base_high]` range; the deduction is that base times the
//! combined contribution rate. Limiting happens before the rate is applied,
//! so contributions stop growing once income passes the upper limit.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::SocialInsuranceConfig;
//! use payroll_core::calculations::compute_social_insurance;
//!
//! let config = SocialInsuranceConfig {
//!     base_low: dec!(3000),
//!     base_high: dec!(25000),
//!     total_rate: dec!(0.105),
//! };
//!
//! assert_eq!(compute_social_insurance(dec!(6000), &config), dec!(630));
//! assert_eq!(compute_social_insurance(dec!(2000), &config), dec!(315));
//! assert_eq!(compute_social_insurance(dec!(90000), &config), dec!(2625));
//! ```

use rust_decimal::Decimal;

use crate::SocialInsuranceConfig;
use crate::calculations::common::clamp;

/// Returns the gross income limited to the configured base range.
pub fn contribution_base(
    gross_income: Decimal,
    config: &SocialInsuranceConfig,
) -> Decimal {
    clamp(gross_income, config.base_low, config.base_high)
}

/// Social insurance deducted from `gross_income`.
pub fn compute_social_insurance(
    gross_income: Decimal,
    config: &SocialInsuranceConfig,
) -> Decimal {
    contribution_base(gross_income, config) * config.total_rate
}
