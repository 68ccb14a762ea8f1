//! Request types for the Shift Summary Calculator API.
//!
//! This module defines the JSON request structure for the `/summary` endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorResult;
use crate::models::{FieldId, RawValue};

/// Request body for the `/summary` endpoint.
///
/// A flat JSON object mapping field names to raw form values. Values may be
/// numbers, strings, `null` or anything else; absent fields count as blank.
///
/// ```json
/// { "net_amount": "100", "tolls": 5, "tips": null }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryRequest {
    /// Raw values keyed by field name.
    pub fields: BTreeMap<String, RawValue>,
}

impl SummaryRequest {
    /// Resolves field names, failing on the first unknown one.
    pub fn into_fields(self) -> CalculatorResult<Vec<(FieldId, RawValue)>> {
        self.fields
            .into_iter()
            .map(|(name, value)| name.parse::<FieldId>().map(|field| (field, value)))
            .collect()
    }
}
