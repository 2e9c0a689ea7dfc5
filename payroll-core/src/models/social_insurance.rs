use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::amount::{MAX_AMOUNT, within_limit};

/// Errors for social insurance settings that would make the deduction
/// meaningless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SocialInsuranceConfigError {
    #[error("contribution base lower limit {low} exceeds upper limit {high}")]
    InvertedBase { low: Decimal, high: Decimal },

    #[error("contribution rate '{name}' must be non-negative, got {rate}")]
    NegativeRate { name: &'static str, rate: Decimal },

    #[error("contribution rate '{name}' must not exceed 1, got {rate}")]
    RateAboveOne { name: &'static str, rate: Decimal },

    #[error("contribution base {name} limit {value} is outside +/-{max}")]
    BaseOutOfRange {
        name: &'static str,
        value: Decimal,
        max: Decimal,
    },
}

/// The six individual contribution rates withheld from an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionRates {
    pub pension: Decimal,
    pub medical: Decimal,
    pub unemployment: Decimal,
    pub work_injury: Decimal,
    pub maternity: Decimal,
    pub housing_fund: Decimal,
}

impl ContributionRates {
    fn named(&self) -> [(&'static str, Decimal); 6] {
        [
            ("pension", self.pension),
            ("medical", self.medical),
            ("unemployment", self.unemployment),
            ("work_injury", self.work_injury),
            ("maternity", self.maternity),
            ("housing_fund", self.housing_fund),
        ]
    }

    /// Sum of all six rates.
    pub fn total(&self) -> Decimal {
        self.named().iter().map(|(_, rate)| *rate).sum()
    }

    /// Checks that every rate is a fraction in `[0, 1]`.
    pub fn validate(&self) -> Result<(), SocialInsuranceConfigError> {
        self.named()
            .into_iter()
            .try_for_each(|(name, rate)| check_rate(name, rate))
    }
}

/// Contribution base limits and the combined withholding rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceConfig {
    /// Lower limit of the contribution base.
    pub base_low: Decimal,

    /// Upper limit of the contribution base.
    pub base_high: Decimal,

    /// Combined rate applied to the clamped base.
    pub total_rate: Decimal,
}

impl SocialInsuranceConfig {
    /// Builds a configuration from base limits and the individual rates,
    /// validating both.
    ///
    /// # Errors
    ///
    /// Returns [`SocialInsuranceConfigError`] if `base_low > base_high`, a
    /// limit is beyond [`MAX_AMOUNT`], or any rate (or their total) is
    /// outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use payroll_core::{ContributionRates, SocialInsuranceConfig};
    ///
    /// let rates = ContributionRates {
    ///     pension: dec!(0.08),
    ///     medical: dec!(0.02),
    ///     unemployment: dec!(0.005),
    ///     work_injury: dec!(0),
    ///     maternity: dec!(0),
    ///     housing_fund: dec!(0),
    /// };
    ///
    /// let config = SocialInsuranceConfig::from_rates(dec!(3000), dec!(25000), &rates).unwrap();
    ///
    /// assert_eq!(config.total_rate, dec!(0.105));
    /// ```
    pub fn from_rates(
        base_low: Decimal,
        base_high: Decimal,
        rates: &ContributionRates,
    ) -> Result<Self, SocialInsuranceConfigError> {
        rates.validate()?;
        let config = Self {
            base_low,
            base_high,
            total_rate: rates.total(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the base limits are ordered and bounded and the total rate is
    /// a fraction.
    pub fn validate(&self) -> Result<(), SocialInsuranceConfigError> {
        for (name, value) in [("lower", self.base_low), ("upper", self.base_high)] {
            if !within_limit(value) {
                return Err(SocialInsuranceConfigError::BaseOutOfRange {
                    name,
                    value,
                    max: MAX_AMOUNT,
                });
            }
        }
        if self.base_low > self.base_high {
            return Err(SocialInsuranceConfigError::InvertedBase {
                low: self.base_low,
                high: self.base_high,
            });
        }
        check_rate("total", self.total_rate)
    }
}

fn check_rate(
    name: &'static str,
    rate: Decimal,
) -> Result<(), SocialInsuranceConfigError> {
    if rate < Decimal::ZERO {
        Err(SocialInsuranceConfigError::NegativeRate { name, rate })
    } else if rate > Decimal::ONE {
        Err(SocialInsuranceConfigError::RateAboveOne { name, rate })
    } else {
        Ok(())
    }
}
