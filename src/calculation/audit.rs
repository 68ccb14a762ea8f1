//! Audit trace for the shift totals.
//!
//! Describes each derived total as a formula over named operands, in the
//! order the calculation evaluates them, so a pay-in sheet can be checked
//! line by line.

use serde_json::{Map, Value, json};

use crate::models::{AuditStep, ShiftInput, ShiftResult};

use super::shift_calculator::{COMMISSION_RATE, LEVY_PER_JOB};

/// Builds the audit trace for a calculated shift.
///
/// One step per derived field. Operands are read back from `input` and
/// `result`, so the trace always agrees with the values it describes.
pub fn audit_trace(input: &ShiftInput, result: &ShiftResult) -> Vec<AuditStep> {
    let steps: [(&str, &str, Vec<(&str, f64)>, f64); 17] = [
        (
            "meter_totals",
            "net_amount + tolls + govt_levy + booking_fee",
            vec![
                ("net_amount", input.net_amount),
                ("tolls", input.tolls),
                ("govt_levy", input.govt_levy),
                ("booking_fee", input.booking_fee),
            ],
            result.meter_totals,
        ),
        (
            "shift_totals",
            "meter_totals + tips",
            vec![("meter_totals", result.meter_totals), ("tips", input.tips)],
            result.shift_totals,
        ),
        (
            "eftpos",
            "live_eftpos + card",
            vec![("live_eftpos", input.live_eftpos), ("card", input.card)],
            result.eftpos,
        ),
        (
            "subtotal1",
            "card + cabcharge + app_pay",
            vec![
                ("card", input.card),
                ("cabcharge", input.cabcharge),
                ("app_pay", input.app_pay),
            ],
            result.subtotal1,
        ),
        (
            "subtotal2",
            "subtotal1 + subsidy",
            vec![("subtotal1", result.subtotal1), ("subsidy", input.subsidy)],
            result.subtotal2,
        ),
        (
            "txn_totals",
            "subtotal2 + account",
            vec![("subtotal2", result.subtotal2), ("account", input.account)],
            result.txn_totals,
        ),
        (
            "ttss_subsidy",
            "subsidy + paper_ttss",
            vec![("subsidy", input.subsidy), ("paper_ttss", input.paper_ttss)],
            result.ttss_subsidy,
        ),
        (
            "sub_total",
            "txn_totals + paper_ttss + fuel_expense + live_eftpos",
            vec![
                ("txn_totals", result.txn_totals),
                ("paper_ttss", input.paper_ttss),
                ("fuel_expense", input.fuel_expense),
                ("live_eftpos", input.live_eftpos),
            ],
            result.sub_total,
        ),
        (
            "gross_total",
            "meter_totals",
            vec![("meter_totals", result.meter_totals)],
            result.gross_total,
        ),
        (
            "correct_m7s",
            "ttss_subsidy + account",
            vec![
                ("ttss_subsidy", result.ttss_subsidy),
                ("account", input.account),
            ],
            result.correct_m7s,
        ),
        (
            "cash",
            "meter_totals - txn_totals - govt_levy",
            vec![
                ("meter_totals", result.meter_totals),
                ("txn_totals", result.txn_totals),
                ("govt_levy", input.govt_levy),
            ],
            result.cash,
        ),
        (
            "deduct_levy",
            "(rank_hail_jobs + dispatched_jobs) * levy_per_job",
            vec![
                ("rank_hail_jobs", input.rank_hail_jobs),
                ("dispatched_jobs", input.dispatched_jobs),
                ("levy_per_job", LEVY_PER_JOB),
            ],
            result.deduct_levy,
        ),
        (
            "total1",
            "fuel_expense + car_wash + eftpos + paper_ttss + account",
            vec![
                ("fuel_expense", input.fuel_expense),
                ("car_wash", input.car_wash),
                ("eftpos", result.eftpos),
                ("paper_ttss", input.paper_ttss),
                ("account", input.account),
            ],
            result.total1,
        ),
        (
            "gross_takings",
            "total1 + cash",
            vec![("total1", result.total1), ("cash", result.cash)],
            result.gross_takings,
        ),
        (
            "less_comm45",
            "round(gross_takings * commission_rate, 2)",
            vec![
                ("gross_takings", result.gross_takings),
                ("commission_rate", COMMISSION_RATE),
            ],
            result.less_comm45,
        ),
        (
            "total2",
            "gross_takings - less_comm45",
            vec![
                ("gross_takings", result.gross_takings),
                ("less_comm45", result.less_comm45),
            ],
            result.total2,
        ),
        (
            "total_pay_gst",
            "total2 - total1 + govt_levy",
            vec![
                ("total2", result.total2),
                ("total1", result.total1),
                ("govt_levy", input.govt_levy),
            ],
            result.total_pay_gst,
        ),
    ];

    steps
        .into_iter()
        .enumerate()
        .map(|(index, (rule_id, formula, operands, value))| {
            let inputs: Map<String, Value> = operands
                .into_iter()
                .map(|(name, operand)| (name.to_string(), json!(operand)))
                .collect();

            AuditStep {
                step_number: index as u32 + 1,
                rule_id: rule_id.to_string(),
                formula: formula.to_string(),
                inputs: Value::Object(inputs),
                value,
            }
        })
        .collect()
}
