//! Summary report rendering.
//!
//! Lays the calculated totals out as the two columns of the driver's
//! paperwork: the end-of-shift summary and the pay-in sheet. Dollar
//! amounts are shown to the cent; job counts are shown as plain numbers.

use std::fmt;

use crate::models::{
    ReportLine, ReportSection, ShiftInput, ShiftResult, SummaryReport, ValueFormat,
};

/// Heading of the first report section.
pub const SHIFT_SECTION_TITLE: &str = "End of Shift Summary";

/// Heading of the second report section.
pub const PAY_IN_SECTION_TITLE: &str = "Pay-In";

/// Formats a dollar amount as `$X.XX`. The sign follows the dollar sign,
/// so negatives read `$-X.XX`.
///
/// # Examples
///
/// ```
/// use shift_summary::report::format_currency;
///
/// assert_eq!(format_currency(23.4), "$23.40");
/// assert_eq!(format_currency(-20.0), "$-20.00");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Formats a job count as the shortest plain number: whole counts print as
/// `2`, not `2.0`.
///
/// ```
/// use shift_summary::report::format_count;
///
/// assert_eq!(format_count(2.0), "2");
/// assert_eq!(format_count(2.5), "2.5");
/// ```
pub fn format_count(count: f64) -> String {
    format!("{}", count)
}

fn currency(label: &str, value: f64) -> ReportLine {
    ReportLine {
        label: label.to_string(),
        value,
        format: ValueFormat::Currency,
        display: format_currency(value),
    }
}

fn count(label: &str, value: f64) -> ReportLine {
    ReportLine {
        label: label.to_string(),
        value,
        format: ValueFormat::Count,
        display: format_count(value),
    }
}

/// Builds the summary report for a calculated shift.
///
/// `eftpos`, `ttss_subsidy`, `sub_total` and `deduct_levy` are calculated
/// but have no row. The "-Total(1)" row shows `gross_total`, matching the
/// paper sheet drivers already use.
pub fn build_report(input: &ShiftInput, result: &ShiftResult) -> SummaryReport {
    let shift = ReportSection {
        title: SHIFT_SECTION_TITLE.to_string(),
        lines: vec![
            currency("NET AMT", input.net_amount),
            currency("TOLLS", input.tolls),
            currency("GOVT LEVY", input.govt_levy),
            currency("BOOKING F", input.booking_fee),
            currency("METER TOTALS", result.meter_totals),
            currency("TIPS", input.tips),
            currency("Shift Totals", result.shift_totals),
            count("RANK/HAIL JOBS", input.rank_hail_jobs),
            count("DISPATCHED JOBS", input.dispatched_jobs),
            currency("CARD", input.card),
            currency("CABCHARGE", input.cabcharge),
            currency("APP-PAY", input.app_pay),
            currency("SUBTOTAL1", result.subtotal1),
            currency("SUBSIDY", input.subsidy),
            currency("SUBTOTAL2", result.subtotal2),
            currency("ACCOUNT", input.account),
            currency("TXN TOTALS", result.txn_totals),
        ],
    };

    let pay_in = ReportSection {
        title: PAY_IN_SECTION_TITLE.to_string(),
        lines: vec![
            currency("Fuel", input.fuel_expense),
            currency("Car Wash", input.car_wash),
            currency("Correct M7s", result.correct_m7s),
            currency("Total(1)", result.total1),
            currency("Cash", result.cash),
            currency("GROSS TAKINGS", result.gross_takings),
            currency("Commission 45%", result.less_comm45),
            currency("Hire Charge 55%", result.total2),
            currency("-Total(1)", result.gross_total),
            currency("+Levy", input.govt_levy),
            currency("TOTAL CASH PAY-IN", result.total_pay_gst),
        ],
    };

    SummaryReport {
        sections: vec![shift, pay_in],
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{}", "-".repeat(section.title.len()))?;
            for line in &section.lines {
                writeln!(f, "{:<20}{:>12}", line.label, line.display)?;
            }
        }
        Ok(())
    }
}
