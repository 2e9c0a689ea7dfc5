use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TaxBracket;
use super::amount::{MAX_AMOUNT, within_limit};

/// Monthly exemption threshold of the reference schedule.
pub const STANDARD_EXEMPTION_THRESHOLD: i64 = 3500;

/// Errors raised when a bracket table breaks the ordering rules that the
/// descending lookup relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTableError {
    #[error("tax table has no brackets")]
    Empty,

    #[error("bracket thresholds must be strictly decreasing, but {lower} follows {upper}")]
    ThresholdOrder { upper: Decimal, lower: Decimal },

    #[error("last bracket must start at 0, got {0}")]
    MissingCatchAll(Decimal),

    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("bracket at {upper} has rate {upper_rate}, lower than {lower_rate} at {lower}")]
    RateOrder {
        upper: Decimal,
        upper_rate: Decimal,
        lower: Decimal,
        lower_rate: Decimal,
    },

    #[error("exemption threshold must be non-negative, got {0}")]
    NegativeExemption(Decimal),

    #[error("{name} {value} is outside +/-{max}")]
    AmountOutOfRange {
        name: &'static str,
        value: Decimal,
        max: Decimal,
    },
}

/// An ordered progressive schedule plus the exemption deducted before it
/// applies.
///
/// Brackets are held highest threshold first, ending with a catch-all at 0,
/// so the first bracket whose threshold the income reaches is the one that
/// applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
    exemption_threshold: Decimal,
}

impl TaxTable {
    /// Builds a table after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaxTableError`] if the table is empty, thresholds are not
    /// strictly decreasing, the last threshold is not zero, a rate is outside
    /// `[0, 1]`, a higher bracket has a lower rate than the one below it, the
    /// exemption is negative, or any amount is beyond [`MAX_AMOUNT`].
    pub fn new(
        brackets: Vec<TaxBracket>,
        exemption_threshold: Decimal,
    ) -> Result<Self, TaxTableError> {
        if exemption_threshold < Decimal::ZERO {
            return Err(TaxTableError::NegativeExemption(exemption_threshold));
        }

        let amounts = std::iter::once(("exemption threshold", exemption_threshold)).chain(
            brackets.iter().flat_map(|b| {
                [
                    ("bracket threshold", b.threshold),
                    ("quick subtractor", b.quick_subtractor),
                ]
            }),
        );
        for (name, value) in amounts {
            if !within_limit(value) {
                return Err(TaxTableError::AmountOutOfRange {
                    name,
                    value,
                    max: MAX_AMOUNT,
                });
            }
        }

        let last = brackets.last().ok_or(TaxTableError::Empty)?;
        if !last.threshold.is_zero() {
            return Err(TaxTableError::MissingCatchAll(last.threshold));
        }

        if let Some(bad) = brackets
            .iter()
            .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
        {
            return Err(TaxTableError::InvalidRate(bad.rate));
        }

        for pair in brackets.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if lower.threshold >= upper.threshold {
                return Err(TaxTableError::ThresholdOrder {
                    upper: upper.threshold,
                    lower: lower.threshold,
                });
            }
            if upper.rate < lower.rate {
                return Err(TaxTableError::RateOrder {
                    upper: upper.threshold,
                    upper_rate: upper.rate,
                    lower: lower.threshold,
                    lower_rate: lower.rate,
                });
            }
        }

        Ok(Self {
            brackets,
            exemption_threshold,
        })
    }

    /// The seven-bracket monthly schedule with a 3500 exemption.
    pub fn standard() -> Self {
        let row = |threshold: i64, rate_pct: i64, subtractor: i64| {
            TaxBracket::new(
                Decimal::from(threshold),
                Decimal::new(rate_pct, 2),
                Decimal::from(subtractor),
            )
        };

        Self {
            brackets: vec![
                row(80000, 45, 13505),
                row(55000, 35, 5505),
                row(35000, 30, 2755),
                row(9000, 25, 1005),
                row(4500, 20, 555),
                row(1500, 10, 105),
                row(0, 3, 0),
            ],
            exemption_threshold: Decimal::from(STANDARD_EXEMPTION_THRESHOLD),
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn exemption_threshold(&self) -> Decimal {
        self.exemption_threshold
    }

    /// Returns `(threshold, gap)` for every interior boundary where the tax
    /// computed with the bracket below differs from the tax computed with
    /// the bracket starting there.
    ///
    /// A well-chosen set of quick subtractors yields no gaps.
    pub fn discontinuities(&self) -> Vec<(Decimal, Decimal)> {
        self.brackets
            .windows(2)
            .filter_map(|pair| {
                let (upper, lower) = (&pair[0], &pair[1]);
                let gap = upper.tax_on(upper.threshold) - lower.tax_on(upper.threshold);
                (!gap.is_zero()).then_some((upper.threshold, gap))
            })
            .collect()
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::standard()
    }
}
