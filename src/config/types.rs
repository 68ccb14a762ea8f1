//! Configuration types for the shift form.
//!
//! This module contains the field registry and the structure it is
//! deserialized from.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{FieldId, FieldSpec};

/// Field list file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsConfig {
    /// One entry per form field.
    pub fields: Vec<FieldSpec>,
}

/// The descriptors for all seventeen form fields.
///
/// A registry always holds exactly one [`FieldSpec`] per [`FieldId`], so
/// lookups cannot miss.
///
/// # Example
///
/// ```
/// use shift_summary::config::FieldRegistry;
/// use shift_summary::models::FieldId;
///
/// let registry = FieldRegistry::default();
/// assert_eq!(registry.spec(FieldId::AppPay).label, "App-Pay");
/// assert_eq!(registry.fields().count(), 17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistry {
    specs: BTreeMap<FieldId, FieldSpec>,
}

impl FieldRegistry {
    /// Builds a registry from a list of descriptors.
    ///
    /// Fails with [`CalculatorError::InvalidRegistry`] if a field is listed
    /// twice or missing, if a step is not positive, or if a minimum exceeds
    /// its maximum.
    pub fn from_specs(specs: Vec<FieldSpec>) -> CalculatorResult<Self> {
        let mut by_id = BTreeMap::new();

        for spec in specs {
            if spec.step.is_nan() || spec.step <= 0.0 {
                return Err(CalculatorError::InvalidRegistry {
                    message: format!("field '{}' has non-positive step {}", spec.id, spec.step),
                });
            }
            if spec.min.is_nan() || spec.max.is_nan() || spec.min > spec.max {
                return Err(CalculatorError::InvalidRegistry {
                    message: format!(
                        "field '{}' has min {} greater than max {}",
                        spec.id, spec.min, spec.max
                    ),
                });
            }
            let id = spec.id;
            if by_id.insert(id, spec).is_some() {
                return Err(CalculatorError::InvalidRegistry {
                    message: format!("field '{}' is listed more than once", id),
                });
            }
        }

        let missing: Vec<&str> = FieldId::ALL
            .into_iter()
            .filter(|id| !by_id.contains_key(id))
            .map(FieldId::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(CalculatorError::InvalidRegistry {
                message: format!("missing fields: {}", missing.join(", ")),
            });
        }

        Ok(Self { specs: by_id })
    }

    /// Returns the descriptor for a field.
    pub fn spec(&self, id: FieldId) -> &FieldSpec {
        &self.specs[&id]
    }

    /// Iterates the descriptors in form order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.values()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self {
            specs: FieldId::ALL
                .into_iter()
                .map(|id| (id, FieldSpec::builtin(id)))
                .collect(),
        }
    }
}
