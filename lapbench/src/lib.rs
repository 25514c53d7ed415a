#![warn(missing_docs)]
//! # Lapbench
//!
//! Micro-benchmarking harness for timing small code paths in place: name a
//! unit of work, pick an iteration count, and get overhead-corrected
//! summary statistics through a leveled, optionally color-coded log
//! channel.
//!
//! - **Overhead calibration**: the timer's own per-call cost is measured
//!   before every benchmark and subtracted from each sample
//! - **Summary statistics**: mean, median, population stddev, total, min,
//!   max per benchmark
//! - **Immediate or deferred execution**: `execute` now, or queue and drain
//!   first-in-first-out with `run_all`
//! - **Leveled logging**: severity-filtered notices and results tables to
//!   any `io::Write` sink, color-coded on terminals
//!
//! All benchmarks run sequentially on the calling thread; the harness
//! never isolates, retries, or parallelizes the work it measures.
//!
//! ## Quick Start
//!
//! ```
//! use lapbench::prelude::*;
//!
//! fn main() -> Result<(), BenchError> {
//!     let mut bencher = Bencher::new(LogLevel::Info, LogSink::stdout());
//!
//!     bencher.execute("vector sum", 100, || {
//!         let total: u64 = (0..1000).sum();
//!         std::hint::black_box(total);
//!     })?;
//!
//!     bencher.print_results();
//!     Ok(())
//! }
//! ```

// Re-export core types
pub use lapbench_core::{
    BenchError, BenchResult, Bencher, DEFAULT_CALIBRATION_LOOPS, LogSink,
    RUNNER_CALIBRATION_LOOPS, Timer, measure_overhead, run,
};

// Re-export stats
pub use lapbench_stats::{StatsError, Summary, compute_summary};

// Re-export report rendering
pub use lapbench_report::{
    LogLevel, ResultRow, format_duration, format_log_line, generate_json_report,
    render_results_block, render_table,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchError, BenchResult, Bencher, LogLevel, LogSink};
}
