//! Operations run on a `Chronicle`
//!
//! - `report`: parse a log, rebuild its commits and print them newest first

pub mod report;
