//! Shift summary models.
//!
//! A [`ShiftSummary`] bundles everything produced by one form submission:
//! the coerced inputs, the derived totals, the rendered report and the audit
//! trace of how each total was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ShiftInput, ShiftResult};

/// How a report value is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Dollars and cents, e.g. `$12.50`.
    Currency,
    /// A plain number, used for job counts.
    Count,
}

/// A single labelled row of the summary report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    /// The row label, e.g. "METER TOTALS".
    pub label: String,
    /// The unformatted value.
    pub value: f64,
    /// How the value is formatted.
    pub format: ValueFormat,
    /// The formatted value.
    pub display: String,
}

/// A titled group of report rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// The section heading.
    pub title: String,
    /// The rows in display order.
    pub lines: Vec<ReportLine>,
}

/// The rendered summary: "End of Shift Summary" and "Pay-In".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// The report sections in display order.
    pub sections: Vec<ReportSection>,
}

impl SummaryReport {
    /// Finds a row by its label across all sections.
    pub fn line(&self, label: &str) -> Option<&ReportLine> {
        self.sections
            .iter()
            .flat_map(|section| section.lines.iter())
            .find(|line| line.label == label)
    }
}

/// One step of the audit trace: a derived field and how it was computed.
///
/// # Example
///
/// ```
/// use shift_summary::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "meter_totals".to_string(),
///     formula: "net_amount + tolls + govt_levy + booking_fee".to_string(),
///     inputs: serde_json::json!({"net_amount": 100.0}),
///     value: 110.0,
/// };
/// assert_eq!(step.rule_id, "meter_totals");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of this step in the calculation order, starting at 1.
    pub step_number: u32,
    /// The derived field this step produced.
    pub rule_id: String,
    /// The formula, written in terms of field names.
    pub formula: String,
    /// The operand values the formula was evaluated with.
    pub inputs: serde_json::Value,
    /// The computed value.
    pub value: f64,
}

/// The full output of one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// Unique identifier for this calculation.
    pub id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The coerced inputs.
    pub input: ShiftInput,
    /// The derived totals.
    pub result: ShiftResult,
    /// The rendered report.
    pub report: SummaryReport,
    /// How each total was computed, in calculation order.
    pub audit: Vec<AuditStep>,
}
