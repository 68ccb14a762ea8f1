//! Shift Summary Calculator for taxi and rideshare drivers.
//!
//! This crate turns the seventeen figures a driver writes down at the end of
//! a shift (meter readings, card and account payments, expenses, job
//! counts) into the end-of-shift summary and the cash pay-in owed after the
//! 45% commission.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod logo;
pub mod models;
pub mod report;
