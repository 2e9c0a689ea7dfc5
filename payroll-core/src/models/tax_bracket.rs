use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the progressive tax schedule.
///
/// `threshold` is the lower bound of taxable income the row applies to;
/// `quick_subtractor` lets the tax be computed as
/// `taxable_income * rate - quick_subtractor` instead of summing each
/// lower band separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: Decimal,
    pub rate: Decimal,
    pub quick_subtractor: Decimal,
}

impl TaxBracket {
    pub fn new(
        threshold: Decimal,
        rate: Decimal,
        quick_subtractor: Decimal,
    ) -> Self {
        Self {
            threshold,
            rate,
            quick_subtractor,
        }
    }

    /// Tax owed on `taxable_income` if this bracket applies.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        taxable_income * self.rate - self.quick_subtractor
    }
}
