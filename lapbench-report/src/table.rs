//! Results Table Rendering
//!
//! One fixed-width row per recorded benchmark, durations humanized through
//! [`format_duration`].

use crate::duration::format_duration;
use crate::log::{LogLevel, format_tag};
use serde::{Deserialize, Serialize};

const NAME_WIDTH: usize = 20;
const DURATION_WIDTH: usize = 15;
const ITERATIONS_WIDTH: usize = 10;

/// One row of the results table: a benchmark name plus its summary record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    /// Benchmark name (the result-map key).
    pub name: String,
    /// Mean corrected duration per iteration, nanoseconds.
    pub mean_ns: f64,
    /// Median corrected duration per iteration, nanoseconds.
    pub median_ns: f64,
    /// Population standard deviation of the samples, nanoseconds.
    pub std_dev_ns: f64,
    /// Sum of all corrected samples, nanoseconds.
    pub total_ns: f64,
    /// Smallest corrected sample, nanoseconds.
    pub min_ns: f64,
    /// Largest corrected sample, nanoseconds.
    pub max_ns: f64,
    /// Number of samples the record was computed from.
    pub iterations: u32,
}

/// Render the full results table, header plus one row per benchmark.
pub fn render_table(rows: &[ResultRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<name_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<iter_w$}\n",
        "Benchmark",
        "Avg Duration",
        "Median Duration",
        "Std Deviation",
        "Total Duration",
        "Min",
        "Max",
        "Iterations",
        name_w = NAME_WIDTH,
        dur_w = DURATION_WIDTH,
        iter_w = ITERATIONS_WIDTH,
    ));

    for row in rows {
        out.push_str(&format!(
            "{:<name_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<dur_w$}{:<iter_w$}\n",
            row.name,
            format_duration(row.mean_ns),
            format_duration(row.median_ns),
            format_duration(row.std_dev_ns),
            format_duration(row.total_ns),
            format_duration(row.min_ns),
            format_duration(row.max_ns),
            row.iterations,
            name_w = NAME_WIDTH,
            dur_w = DURATION_WIDTH,
            iter_w = ITERATIONS_WIDTH,
        ));
    }

    out
}

/// Render the `[RESULT timestamp]` tag followed by the full table.
///
/// This is the payload `log_results` writes to the configured sink.
pub fn render_results_block(rows: &[ResultRow], colored: bool) -> String {
    format!("{}\n{}", format_tag(LogLevel::Result, colored), render_table(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ResultRow {
        ResultRow {
            name: "fibonacci".to_string(),
            mean_ns: 1_500_000.0,
            median_ns: 1_400_000.0,
            std_dev_ns: 120_000.0,
            total_ns: 150_000_000.0,
            min_ns: 1_200_000.0,
            max_ns: 2_100_000.0,
            iterations: 100,
        }
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let table = render_table(&[sample_row()]);
        let mut lines = table.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("Benchmark"));
        assert!(header.contains("Avg Duration"));
        assert!(header.contains("Iterations"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("fibonacci"));
        assert!(row.contains("1.50ms"));
        assert!(row.contains("100"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_columns_are_fixed_width() {
        let table = render_table(&[sample_row()]);
        let row = table.lines().nth(1).unwrap();

        // Name column is padded to 20, mean starts right after.
        assert_eq!(&row[..NAME_WIDTH], "fibonacci           ");
        assert!(row[NAME_WIDTH..].starts_with("1.50ms"));
    }

    #[test]
    fn test_results_block_is_tagged() {
        let block = render_results_block(&[sample_row()], false);

        assert!(block.starts_with("[RESULT "));
        assert!(block.contains("Benchmark"));
        assert!(block.contains("fibonacci"));
    }

    #[test]
    fn test_empty_result_set_renders_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 1);
    }
}
