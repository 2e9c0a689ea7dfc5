//! Small numeric helpers shared by the calculators and the output layer.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to two decimal places, halves away from zero.
///
/// Calculators keep full precision; this is applied only when results are
/// presented.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(577.505)), dec!(577.51));
/// assert_eq!(round_half_up(dec!(577.504)), dec!(577.50));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Limits `value` to the inclusive range `[low, high]`.
///
/// Unlike [`Ord::clamp`] this never panics: with `low > high` the lower
/// limit is checked first and wins.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(2000), dec!(3000), dec!(25000)), dec!(3000));
/// assert_eq!(clamp(dec!(6000), dec!(3000), dec!(25000)), dec!(6000));
/// assert_eq!(clamp(dec!(30000), dec!(3000), dec!(25000)), dec!(25000));
/// ```
pub fn clamp(
    value: Decimal,
    low: Decimal,
    high: Decimal,
) -> Decimal {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
