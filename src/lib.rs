//! Attendance time-accounting engine
//!
//! This crate turns raw clock-in/clock-out records into worked and overtime hours,
//! aggregates approved records over a reporting period and produces per-employee
//! and grouped attendance reports for a six-day (Monday to Saturday) work week.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
