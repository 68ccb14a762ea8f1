//! Cent rounding for the commission.

use rust_decimal::prelude::{Decimal, RoundingStrategy, ToPrimitive};

/// Rounds a dollar amount to two decimal places.
///
/// Rounds half to even on the exact binary value of `amount`, so a float
/// that prints as a midpoint but is stored just below it rounds down, as
/// Python's `round(x, 2)` does. Non-finite input is returned unchanged.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::round_to_cents;
///
/// assert_eq!(round_to_cents(66.6), 66.6);
/// assert_eq!(round_to_cents(0.125), 0.12);
/// assert_eq!(round_to_cents(0.375), 0.38);
/// assert_eq!(round_to_cents(2.675), 2.67);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    Decimal::from_f64_retain(amount)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(amount)
}
