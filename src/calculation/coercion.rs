//! Safe numeric coercion for raw form values.
//!
//! This is the only guard between user input and the arithmetic: every raw
//! value becomes a finite number and nothing here can fail. Negative values
//! pass through untouched; range limits belong to the form.

use crate::models::{FieldId, RawValue, ShiftInput};

/// Coerces a raw value to a float.
///
/// Returns `0.0` for null, the empty string, anything that does not parse
/// and anything that parses to a non-finite value. Strings are trimmed
/// before parsing. Booleans count as `1.0` and `0.0`.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::to_float_safe;
/// use shift_summary::models::RawValue;
///
/// assert_eq!(to_float_safe(&RawValue::Empty), 0.0);
/// assert_eq!(to_float_safe(&RawValue::from("")), 0.0);
/// assert_eq!(to_float_safe(&RawValue::from("abc")), 0.0);
/// assert_eq!(to_float_safe(&RawValue::from("12.5")), 12.5);
/// assert_eq!(to_float_safe(&RawValue::from(-3.0)), -3.0);
/// ```
pub fn to_float_safe(value: &RawValue) -> f64 {
    let parsed = match value {
        RawValue::Empty => None,
        RawValue::Number(number) => Some(*number),
        RawValue::Text(text) => text.trim().parse::<f64>().ok(),
        RawValue::Other(serde_json::Value::Bool(flag)) => Some(if *flag { 1.0 } else { 0.0 }),
        RawValue::Other(_) => None,
    };

    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}

/// Coerces a raw value to an integer.
///
/// Follows the same policy as [`to_float_safe`]. Numbers are truncated
/// toward zero; strings must be integer literals, so `"12.5"` becomes `0`.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::to_int_safe;
/// use shift_summary::models::RawValue;
///
/// assert_eq!(to_int_safe(&RawValue::from(" 12 ")), 12);
/// assert_eq!(to_int_safe(&RawValue::from("12.5")), 0);
/// assert_eq!(to_int_safe(&RawValue::from(3.9)), 3);
/// ```
pub fn to_int_safe(value: &RawValue) -> i64 {
    match value {
        RawValue::Empty => 0,
        RawValue::Number(number) if number.is_finite() => number.trunc() as i64,
        RawValue::Number(_) => 0,
        RawValue::Text(text) => text.trim().parse::<i64>().unwrap_or(0),
        RawValue::Other(serde_json::Value::Bool(flag)) => i64::from(*flag),
        RawValue::Other(_) => 0,
    }
}

/// Builds a [`ShiftInput`] from raw field values.
///
/// Fields missing from `values` are zero.
///
/// # Example
///
/// ```
/// use shift_summary::calculation::coerce_input;
/// use shift_summary::models::{FieldId, RawValue};
///
/// let raw = [
///     (FieldId::NetAmount, RawValue::from("100")),
///     (FieldId::Tolls, RawValue::from("oops")),
/// ];
/// let input = coerce_input(raw.iter().map(|(field, value)| (*field, value)));
/// assert_eq!(input.net_amount, 100.0);
/// assert_eq!(input.tolls, 0.0);
/// ```
pub fn coerce_input<'a, I>(values: I) -> ShiftInput
where
    I: IntoIterator<Item = (FieldId, &'a RawValue)>,
{
    let mut input = ShiftInput::default();
    for (field, value) in values {
        *input.get_mut(field) = to_float_safe(value);
    }
    input
}
