//! Untyped values as they arrive from the form.

use serde::{Deserialize, Serialize};

/// A value as entered into the form, before coercion.
///
/// Deserializes from any JSON value: `null` becomes [`RawValue::Empty`],
/// numbers and strings keep their shape, and anything else lands in
/// [`RawValue::Other`] so that a malformed field never rejects the
/// whole submission.
///
/// # Example
///
/// ```
/// use shift_summary::models::RawValue;
///
/// let values: Vec<RawValue> = serde_json::from_str(r#"[null, 12.5, "7", true]"#).unwrap();
/// assert_eq!(values[0], RawValue::Empty);
/// assert_eq!(values[1], RawValue::Number(12.5));
/// assert_eq!(values[2], RawValue::Text("7".to_string()));
/// assert!(matches!(values[3], RawValue::Other(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// No value was entered.
    #[default]
    Empty,
    /// A numeric value.
    Number(f64),
    /// Text as typed by the user.
    Text(String),
    /// Any other JSON shape.
    Other(serde_json::Value),
}

impl RawValue {
    /// Whether the value is null or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawValue::Empty, RawValue::Number)
    }
}
