//! HTTP API module for the Shift Summary Calculator.
//!
//! This module provides the REST endpoints a form front end uses to fetch
//! the field list and header logo and to submit a shift for calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
