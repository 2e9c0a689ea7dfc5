use rust_decimal::Decimal;

/// Largest magnitude accepted for any configured amount (base limits,
/// exemption, thresholds, quick subtractors): 10^24.
///
/// Gross income is an `i64`, so with rates capped at 1 every intermediate
/// value of a payroll calculation stays several orders of magnitude below
/// [`Decimal::MAX`].
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xa100_0000, 0x1bce_cced, 0xd3c2, false, 0);

/// Whether `value` lies within `[-MAX_AMOUNT, MAX_AMOUNT]`.
pub fn within_limit(value: Decimal) -> bool {
    value.abs() <= MAX_AMOUNT
}
