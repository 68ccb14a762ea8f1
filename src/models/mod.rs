//! Core data models for the Shift Summary Calculator.
//!
//! This module contains all the domain models used throughout the calculator.

mod field;
mod raw_value;
mod shift_input;
mod shift_result;
mod summary;

pub use field::{
    DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_STEP, FUEL_PLACEHOLDER, FieldId, FieldSpec,
};
pub use raw_value::RawValue;
pub use shift_input::ShiftInput;
pub use shift_result::ShiftResult;
pub use summary::{AuditStep, ReportLine, ReportSection, ShiftSummary, SummaryReport, ValueFormat};
