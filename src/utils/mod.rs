//! Utility modules for the planner.
//!
//! - [`datetime`] - Date, time and weekday parsing and formatting

pub mod datetime;
