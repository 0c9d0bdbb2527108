//! ICS file generation.
//!
//! This module turns calendar events into .ics documents according to RFC 5545.

mod generate;

pub use generate::{PRODID, generate_calendar};
