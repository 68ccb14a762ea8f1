//! Form field identifiers and descriptors.
//!
//! The driver's shift form has exactly seventeen numeric fields. [`FieldId`]
//! names them in form order and [`FieldSpec`] describes how the form
//! collaborator should render each one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Identifies one of the seventeen shift form fields.
///
/// Variants are declared in form order, so ordered collections keyed by
/// `FieldId` iterate the way the form is laid out.
///
/// # Example
///
/// ```
/// use shift_summary::models::FieldId;
///
/// let field: FieldId = "govt_levy".parse().unwrap();
/// assert_eq!(field, FieldId::GovtLevy);
/// assert_eq!(field.as_str(), "govt_levy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// Fuel paid for during the shift, excluding Fuel Card purchases.
    FuelExpense,
    /// Car wash expense.
    CarWash,
    /// Live EFTPOS takings.
    LiveEftpos,
    /// Net fare amount from the meter.
    NetAmount,
    /// Tolls charged to passengers.
    Tolls,
    /// Government passenger levy collected.
    GovtLevy,
    /// Booking fees collected.
    BookingFee,
    /// Tips received.
    Tips,
    /// Number of rank and hail jobs.
    RankHailJobs,
    /// Number of dispatched jobs.
    DispatchedJobs,
    /// Card payments.
    Card,
    /// Cabcharge payments.
    Cabcharge,
    /// In-app payments.
    AppPay,
    /// Electronic subsidy payments.
    Subsidy,
    /// Paper taxi transport subsidy scheme dockets.
    PaperTtss,
    /// Account jobs.
    Account,
    /// Jobs done off the meter. Collected but not used by any formula.
    OffMeterJobs,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 17] = [
        FieldId::FuelExpense,
        FieldId::CarWash,
        FieldId::LiveEftpos,
        FieldId::NetAmount,
        FieldId::Tolls,
        FieldId::GovtLevy,
        FieldId::BookingFee,
        FieldId::Tips,
        FieldId::RankHailJobs,
        FieldId::DispatchedJobs,
        FieldId::Card,
        FieldId::Cabcharge,
        FieldId::AppPay,
        FieldId::Subsidy,
        FieldId::PaperTtss,
        FieldId::Account,
        FieldId::OffMeterJobs,
    ];

    /// Returns the snake_case identifier used on the wire and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FuelExpense => "fuel_expense",
            FieldId::CarWash => "car_wash",
            FieldId::LiveEftpos => "live_eftpos",
            FieldId::NetAmount => "net_amount",
            FieldId::Tolls => "tolls",
            FieldId::GovtLevy => "govt_levy",
            FieldId::BookingFee => "booking_fee",
            FieldId::Tips => "tips",
            FieldId::RankHailJobs => "rank_hail_jobs",
            FieldId::DispatchedJobs => "dispatched_jobs",
            FieldId::Card => "card",
            FieldId::Cabcharge => "cabcharge",
            FieldId::AppPay => "app_pay",
            FieldId::Subsidy => "subsidy",
            FieldId::PaperTtss => "paper_ttss",
            FieldId::Account => "account",
            FieldId::OffMeterJobs => "off_meter_jobs",
        }
    }

    /// Returns the label shown next to the input.
    pub fn default_label(self) -> &'static str {
        match self {
            FieldId::FuelExpense => "Fuel (ignore Fuel Card purchases)",
            FieldId::CarWash => "Car Wash",
            FieldId::LiveEftpos => "Live EFTPOS",
            FieldId::NetAmount => "Net Amount",
            FieldId::Tolls => "Tolls",
            FieldId::GovtLevy => "Govt Levy",
            FieldId::BookingFee => "Booking Fee",
            FieldId::Tips => "Tips",
            FieldId::RankHailJobs => "Rank/Hail Jobs",
            FieldId::DispatchedJobs => "Dispatched Jobs",
            FieldId::Card => "Card",
            FieldId::Cabcharge => "Cabcharge",
            FieldId::AppPay => "App-Pay",
            FieldId::Subsidy => "Subsidy",
            FieldId::PaperTtss => "Paper TTSS",
            FieldId::Account => "Account",
            FieldId::OffMeterJobs => "Off-meter Jobs",
        }
    }

    /// Whether the field holds a job count rather than a dollar amount.
    pub fn is_count(self) -> bool {
        matches!(self, FieldId::RankHailJobs | FieldId::DispatchedJobs)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CalculatorError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// The lowest value the form accepts for any field.
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// The highest value the form accepts for any field.
pub const DEFAULT_MAX_VALUE: f64 = 10000.0;

/// The input step granularity.
pub const DEFAULT_STEP: f64 = 0.01;

/// Placeholder shown in the empty fuel input.
pub const FUEL_PLACEHOLDER: &str = "Ignore fuel paid with Fuel Card";

/// Describes how a single form field is rendered and bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The field this descriptor belongs to.
    pub id: FieldId,
    /// The display label.
    pub label: String,
    /// Step granularity for the input control.
    #[serde(default = "default_step")]
    pub step: f64,
    /// Minimum accepted value.
    #[serde(default = "default_min")]
    pub min: f64,
    /// Maximum accepted value.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Placeholder text shown while the field is blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

fn default_min() -> f64 {
    DEFAULT_MIN_VALUE
}

fn default_max() -> f64 {
    DEFAULT_MAX_VALUE
}

impl FieldSpec {
    /// Builds the built-in descriptor for a field.
    pub fn builtin(id: FieldId) -> Self {
        Self {
            id,
            label: id.default_label().to_string(),
            step: DEFAULT_STEP,
            min: DEFAULT_MIN_VALUE,
            max: DEFAULT_MAX_VALUE,
            placeholder: (id == FieldId::FuelExpense).then(|| FUEL_PLACEHOLDER.to_string()),
        }
    }

    /// Whether `value` lies within the field's bounds.
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}
