//! Rounding of monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for money.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to whole cents, half-up.
///
/// Midpoints are rounded away from zero (`0.125` becomes `0.13`), never to
/// even. The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use pay_scale_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("1234.005").unwrap());
/// assert_eq!(rounded.to_string(), "1234.01");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}
