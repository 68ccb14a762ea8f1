//! The shift totals calculation.
//!
//! Maps the seventeen coerced shift inputs to the derived totals shown on
//! the driver's end-of-shift summary and pay-in sheet.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ShiftInput, ShiftResult, ShiftSummary};
use crate::report::build_report;

use super::audit::audit_trace;
use super::rounding::round_to_cents;

/// Share of gross takings kept as commission.
pub const COMMISSION_RATE: f64 = 0.45;

/// Levy deducted per rank/hail or dispatched job.
pub const LEVY_PER_JOB: f64 = 1.32;

/// Calculates the shift totals.
///
/// Pure and infallible. Each total may depend on those computed before it;
/// `gross_takings` is settled before the commission is taken from it. Only
/// the commission is rounded to cents.
///
/// # Example
///
/// ```
/// use shift_summary::calculation::calculate_shift_result;
/// use shift_summary::models::{FieldId, ShiftInput};
///
/// let input = ShiftInput::default()
///     .with(FieldId::NetAmount, 100.0)
///     .with(FieldId::Tolls, 5.0)
///     .with(FieldId::GovtLevy, 2.0)
///     .with(FieldId::BookingFee, 3.0);
///
/// let result = calculate_shift_result(&input);
/// assert_eq!(result.meter_totals, 110.0);
/// assert_eq!(result.cash, 108.0);
/// ```
pub fn calculate_shift_result(input: &ShiftInput) -> ShiftResult {
    let meter_totals = input.net_amount + input.tolls + input.govt_levy + input.booking_fee;
    let shift_totals = meter_totals + input.tips;
    let eftpos = input.live_eftpos + input.card;
    let subtotal1 = input.card + input.cabcharge + input.app_pay;
    let subtotal2 = subtotal1 + input.subsidy;
    let txn_totals = subtotal2 + input.account;
    let ttss_subsidy = input.subsidy + input.paper_ttss;
    let sub_total = txn_totals + input.paper_ttss + input.fuel_expense + input.live_eftpos;
    let gross_total = meter_totals;
    let correct_m7s = ttss_subsidy + input.account;
    let cash = meter_totals - txn_totals - input.govt_levy;
    let deduct_levy = (input.rank_hail_jobs + input.dispatched_jobs) * LEVY_PER_JOB;
    let total1 =
        input.fuel_expense + input.car_wash + eftpos + input.paper_ttss + input.account;
    let gross_takings = total1 + cash;
    let less_comm45 = round_to_cents(gross_takings * COMMISSION_RATE);
    let total2 = gross_takings - less_comm45;
    let total_pay_gst = total2 - total1 + input.govt_levy;

    ShiftResult {
        meter_totals,
        shift_totals,
        eftpos,
        subtotal1,
        subtotal2,
        txn_totals,
        ttss_subsidy,
        sub_total,
        gross_total,
        correct_m7s,
        cash,
        deduct_levy,
        total1,
        gross_takings,
        less_comm45,
        total2,
        total_pay_gst,
    }
}

/// Calculates the totals and wraps them with the report and audit trace.
pub fn summarize_shift(input: ShiftInput) -> ShiftSummary {
    let result = calculate_shift_result(&input);
    let report = build_report(&input, &result);
    let audit = audit_trace(&input, &result);

    ShiftSummary {
        id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        input,
        result,
        report,
        audit,
    }
}
