#![warn(missing_docs)]
//! Lapbench Core - Measurement Engine
//!
//! This crate provides the measuring half of the harness:
//! - Wall-clock timing and per-call overhead calibration
//! - The benchmark runner: repeat, correct, aggregate
//! - `Bencher`: the registry and FIFO scheduler owning recorded results and
//!   the logging configuration

mod bencher;
mod measure;
mod runner;
mod sink;

pub use bencher::Bencher;
pub use measure::{DEFAULT_CALIBRATION_LOOPS, RUNNER_CALIBRATION_LOOPS, Timer, measure_overhead};
pub use runner::{BenchResult, run};
pub use sink::LogSink;

use thiserror::Error;

/// Errors surfaced by the measurement engine.
///
/// Panics raised by the benchmarked work itself are never caught; they
/// propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum BenchError {
    /// `execute` or `queue_execution` was asked to run zero iterations.
    #[error("benchmark `{0}` requested zero iterations")]
    ZeroIterations(String),
    /// Aggregation rejected the sample sequence.
    #[error(transparent)]
    Stats(#[from] lapbench_stats::StatsError),
}
