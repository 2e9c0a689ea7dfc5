use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Withholding outcome for one employee.
///
/// Values are unrounded; rounding belongs to whatever presents them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub id: String,
    pub gross_income: Decimal,
    pub social_insurance: Decimal,
    pub tax: Decimal,
    pub net_income: Decimal,
}
