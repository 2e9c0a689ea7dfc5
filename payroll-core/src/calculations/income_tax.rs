//! Progressive income tax with quick subtractors.
//!
//! Taxable income is gross income less social insurance less the exemption
//! threshold. Nothing is owed when that is zero or negative. Otherwise the
//! bracket table, ordered highest threshold first, is scanned for the first
//! bracket whose threshold the income has reached, and the tax is
//! `taxable_income * rate - quick_subtractor`.
//!
//! # Reference schedule
//!
//! | Taxable income from | Rate | Quick subtractor |
//! |---------------------|------|------------------|
//! | 80000 | 45% | 13505 |
//! | 55000 | 35% | 5505 |
//! | 35000 | 30% | 2755 |
//! | 9000  | 25% | 1005 |
//! | 4500  | 20% | 555 |
//! | 1500  | 10% | 105 |
//! | 0     | 3%  | 0 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::TaxTable;
//! use payroll_core::calculations::{compute_tax, taxable_income};
//!
//! let table = TaxTable::standard();
//! let taxable = taxable_income(dec!(6000), dec!(630), table.exemption_threshold());
//!
//! assert_eq!(taxable, dec!(1870));
//! assert_eq!(compute_tax(taxable, table.brackets()), dec!(82));
//! ```

use rust_decimal::Decimal;

use crate::TaxBracket;

/// Income left to tax after social insurance and the exemption.
pub fn taxable_income(
    gross_income: Decimal,
    social_insurance: Decimal,
    exemption_threshold: Decimal,
) -> Decimal {
    gross_income - social_insurance - exemption_threshold
}

/// Finds the bracket that applies to a positive `taxable_income`.
///
/// `brackets` must be ordered by threshold, highest first. Returns `None`
/// only if no threshold has been reached, which a table ending in a
/// zero catch-all rules out for positive income.
pub fn find_bracket(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Option<&TaxBracket> {
    brackets.iter().find(|b| b.threshold <= taxable_income)
}

/// Income tax due on `taxable_income`.
///
/// Zero when `taxable_income <= 0`. The result is not rounded.
pub fn compute_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    find_bracket(taxable_income, brackets)
        .map(|bracket| bracket.tax_on(taxable_income))
        .unwrap_or(Decimal::ZERO)
}
