//! Calculation logic for the Shift Summary Calculator.
//!
//! This module contains safe coercion of raw form values, cent rounding,
//! the shift totals calculation itself and its audit trace.

mod audit;
mod coercion;
mod rounding;
mod shift_calculator;

pub use audit::audit_trace;
pub use coercion::{coerce_input, to_float_safe, to_int_safe};
pub use rounding::round_to_cents;
pub use shift_calculator::{
    COMMISSION_RATE, LEVY_PER_JOB, calculate_shift_result, summarize_shift,
};
