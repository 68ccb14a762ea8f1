//! Shift input model.

use serde::{Deserialize, Serialize};

use super::FieldId;

/// The seventeen coerced inputs for one shift.
///
/// Every field defaults to zero, which is also what a blank or unparseable
/// form value becomes after coercion. `off_meter_jobs` is carried along for
/// compatibility but no formula reads it.
///
/// # Example
///
/// ```
/// use shift_summary::models::{FieldId, ShiftInput};
///
/// let input = ShiftInput::default()
///     .with(FieldId::NetAmount, 100.0)
///     .with(FieldId::Tolls, 5.0);
/// assert_eq!(input.net_amount, 100.0);
/// assert_eq!(input.get(FieldId::Tolls), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftInput {
    /// Fuel paid for during the shift.
    pub fuel_expense: f64,
    /// Car wash expense.
    pub car_wash: f64,
    /// Live EFTPOS takings.
    pub live_eftpos: f64,
    /// Net fare amount.
    pub net_amount: f64,
    /// Tolls.
    pub tolls: f64,
    /// Government levy.
    pub govt_levy: f64,
    /// Booking fees.
    pub booking_fee: f64,
    /// Tips.
    pub tips: f64,
    /// Rank and hail job count.
    pub rank_hail_jobs: f64,
    /// Dispatched job count.
    pub dispatched_jobs: f64,
    /// Card payments.
    pub card: f64,
    /// Cabcharge payments.
    pub cabcharge: f64,
    /// App payments.
    pub app_pay: f64,
    /// Electronic subsidy.
    pub subsidy: f64,
    /// Paper TTSS dockets.
    pub paper_ttss: f64,
    /// Account jobs.
    pub account: f64,
    /// Off-meter jobs.
    pub off_meter_jobs: f64,
}

impl ShiftInput {
    /// Returns the value of a field.
    pub fn get(&self, field: FieldId) -> f64 {
        match field {
            FieldId::FuelExpense => self.fuel_expense,
            FieldId::CarWash => self.car_wash,
            FieldId::LiveEftpos => self.live_eftpos,
            FieldId::NetAmount => self.net_amount,
            FieldId::Tolls => self.tolls,
            FieldId::GovtLevy => self.govt_levy,
            FieldId::BookingFee => self.booking_fee,
            FieldId::Tips => self.tips,
            FieldId::RankHailJobs => self.rank_hail_jobs,
            FieldId::DispatchedJobs => self.dispatched_jobs,
            FieldId::Card => self.card,
            FieldId::Cabcharge => self.cabcharge,
            FieldId::AppPay => self.app_pay,
            FieldId::Subsidy => self.subsidy,
            FieldId::PaperTtss => self.paper_ttss,
            FieldId::Account => self.account,
            FieldId::OffMeterJobs => self.off_meter_jobs,
        }
    }

    /// Returns a mutable reference to a field.
    pub fn get_mut(&mut self, field: FieldId) -> &mut f64 {
        match field {
            FieldId::FuelExpense => &mut self.fuel_expense,
            FieldId::CarWash => &mut self.car_wash,
            FieldId::LiveEftpos => &mut self.live_eftpos,
            FieldId::NetAmount => &mut self.net_amount,
            FieldId::Tolls => &mut self.tolls,
            FieldId::GovtLevy => &mut self.govt_levy,
            FieldId::BookingFee => &mut self.booking_fee,
            FieldId::Tips => &mut self.tips,
            FieldId::RankHailJobs => &mut self.rank_hail_jobs,
            FieldId::DispatchedJobs => &mut self.dispatched_jobs,
            FieldId::Card => &mut self.card,
            FieldId::Cabcharge => &mut self.cabcharge,
            FieldId::AppPay => &mut self.app_pay,
            FieldId::Subsidy => &mut self.subsidy,
            FieldId::PaperTtss => &mut self.paper_ttss,
            FieldId::Account => &mut self.account,
            FieldId::OffMeterJobs => &mut self.off_meter_jobs,
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: FieldId, value: f64) -> Self {
        *self.get_mut(field) = value;
        self
    }
}
