use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of employee input: an identifier and a whole-number gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: String,
    pub gross_income: i64,
}

impl EmployeeRecord {
    pub fn new(
        id: impl Into<String>,
        gross_income: i64,
    ) -> Self {
        Self {
            id: id.into(),
            gross_income,
        }
    }

    pub fn gross_income_decimal(&self) -> Decimal {
        Decimal::from(self.gross_income)
    }
}
