#![warn(missing_docs)]
//! Lapbench Report - Rendering and Log Formatting
//!
//! The presentation layer of the harness:
//! - Human-scaled duration formatting (nanoseconds through days)
//! - Leveled, timestamped, optionally color-coded log lines
//! - Fixed-width results tables
//! - JSON rendering of recorded results

mod duration;
mod json;
mod log;
mod table;

pub use duration::format_duration;
pub use json::generate_json_report;
pub use log::{LogLevel, format_log_line, format_tag};
pub use table::{ResultRow, render_results_block, render_table};
