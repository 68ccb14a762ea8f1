//! Derived shift totals.

use serde::{Deserialize, Serialize};

/// The totals derived from a [`ShiftInput`](super::ShiftInput).
///
/// Produced fresh by [`calculate_shift_result`](crate::calculation::calculate_shift_result);
/// every field is a deterministic function of the input. Only
/// `less_comm45` is rounded, the rest keep full precision until display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShiftResult {
    /// Net amount plus tolls, levy and booking fee.
    pub meter_totals: f64,
    /// Meter totals plus tips.
    pub shift_totals: f64,
    /// Live EFTPOS plus card.
    pub eftpos: f64,
    /// Card plus cabcharge plus app payments.
    pub subtotal1: f64,
    /// Subtotal 1 plus subsidy.
    pub subtotal2: f64,
    /// Subtotal 2 plus account.
    pub txn_totals: f64,
    /// Subsidy plus paper TTSS.
    pub ttss_subsidy: f64,
    /// Transaction totals plus paper TTSS, fuel and live EFTPOS.
    pub sub_total: f64,
    /// Same as meter totals.
    pub gross_total: f64,
    /// TTSS subsidy plus account.
    pub correct_m7s: f64,
    /// Meter totals less transactions and levy.
    pub cash: f64,
    /// Levy deduction at $1.32 per job.
    pub deduct_levy: f64,
    /// Fuel, car wash, EFTPOS, paper TTSS and account.
    pub total1: f64,
    /// Total 1 plus cash.
    pub gross_takings: f64,
    /// 45% commission on gross takings, rounded to cents.
    pub less_comm45: f64,
    /// Gross takings after commission (the 55% hire charge).
    pub total2: f64,
    /// Total cash pay-in.
    pub total_pay_gst: f64,
}
