//! Shift form state.
//!
//! [`FormState`] is the explicit stand-in for a UI framework's session
//! state: the render call and the submit handler share it by reference.
//! Each field is either unset, which the UI shows as a blank input, or holds
//! a value within the field's bounds together with the text it was entered
//! as. Unset is distinct from an explicit zero.

use std::collections::BTreeMap;

use tracing::warn;

use crate::calculation::coerce_input;
use crate::config::FieldRegistry;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{FieldId, RawValue, ShiftInput};

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldEntry {
    value: Option<f64>,
    echo: Option<String>,
}

/// The values currently entered into the shift form.
///
/// # Example
///
/// ```
/// use shift_summary::config::FieldRegistry;
/// use shift_summary::form::FormState;
/// use shift_summary::models::{FieldId, RawValue};
///
/// let registry = FieldRegistry::default();
/// let mut form = FormState::new();
///
/// form.enter(&registry, FieldId::NetAmount, &RawValue::from("100")).unwrap();
/// form.enter(&registry, FieldId::Tips, &RawValue::from(0.0)).unwrap();
/// assert_eq!(form.submit().net_amount, 100.0);
///
/// form.clear_all();
/// assert!(form.is_unset(FieldId::NetAmount));
/// assert_eq!(form.display(FieldId::Tips), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    entries: BTreeMap<FieldId, FieldEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates a form with every field unset.
    pub fn new() -> Self {
        Self {
            entries: FieldId::ALL
                .into_iter()
                .map(|field| (field, FieldEntry::default()))
                .collect(),
        }
    }

    /// Enters a value into a field.
    ///
    /// Blank input unsets the field. Input that is not a number, or lies
    /// outside the field's bounds, also unsets the field and is reported as
    /// [`CalculatorError::InvalidFieldValue`].
    pub fn enter(
        &mut self,
        registry: &FieldRegistry,
        field: FieldId,
        raw: &RawValue,
    ) -> CalculatorResult<()> {
        let entry = self.entry_mut(field);

        let (parsed, echo) = match raw {
            RawValue::Empty => {
                *entry = FieldEntry::default();
                return Ok(());
            }
            RawValue::Text(text) if text.trim().is_empty() => {
                *entry = FieldEntry::default();
                return Ok(());
            }
            RawValue::Number(number) => (Some(*number), number.to_string()),
            RawValue::Text(text) => (text.trim().parse::<f64>().ok(), text.clone()),
            RawValue::Other(other) => (None, other.to_string()),
        };

        let spec = registry.spec(field);
        match parsed.filter(|value| spec.accepts(*value)) {
            Some(value) => {
                *entry = FieldEntry {
                    value: Some(value),
                    echo: Some(echo),
                };
                Ok(())
            }
            None => {
                *entry = FieldEntry::default();
                warn!(field = %field, input = %echo, "Rejected form input");
                Err(CalculatorError::InvalidFieldValue {
                    field: field.to_string(),
                    message: format!(
                        "Please enter a valid number between {} and {}",
                        spec.min, spec.max
                    ),
                })
            }
        }
    }

    /// Resets every field to unset.
    pub fn clear_all(&mut self) {
        for entry in self.entries.values_mut() {
            *entry = FieldEntry::default();
        }
    }

    /// Whether the field is blank.
    pub fn is_unset(&self, field: FieldId) -> bool {
        self.entry(field).value.is_none()
    }

    /// The field's value, if one has been entered.
    pub fn value(&self, field: FieldId) -> Option<f64> {
        self.entry(field).value
    }

    /// The text to show in the field's input, empty when unset.
    pub fn display(&self, field: FieldId) -> &str {
        self.entry(field).echo.as_deref().unwrap_or("")
    }

    /// The form's values as raw input, unset fields as [`RawValue::Empty`].
    pub fn raw_values(&self) -> BTreeMap<FieldId, RawValue> {
        self.entries
            .iter()
            .map(|(field, entry)| (*field, RawValue::from(entry.value)))
            .collect()
    }

    /// Coerces the form into a [`ShiftInput`], unset fields as zero.
    pub fn submit(&self) -> ShiftInput {
        let raw = self.raw_values();
        coerce_input(raw.iter().map(|(field, value)| (*field, value)))
    }

    fn entry(&self, field: FieldId) -> &FieldEntry {
        &self.entries[&field]
    }

    fn entry_mut(&mut self, field: FieldId) -> &mut FieldEntry {
        self.entries.entry(field).or_default()
    }
}
