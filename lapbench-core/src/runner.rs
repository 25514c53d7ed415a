//! Benchmark Runner
//!
//! Times one unit of work a fixed number of repetitions, corrects each raw
//! duration by the calibrated timer overhead, and reduces the samples into
//! a [`BenchResult`].

use crate::BenchError;
use crate::measure::{RUNNER_CALIBRATION_LOOPS, Timer, measure_overhead};
use lapbench_report::ResultRow;
use lapbench_stats::compute_summary;
use serde::{Deserialize, Serialize};

/// Summary record for one executed benchmark.
///
/// Immutable once computed; re-running the same benchmark name replaces the
/// whole record. `iterations` always equals the number of samples the
/// aggregates were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
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

impl BenchResult {
    /// View this record as a report row for `name`.
    pub fn to_row(&self, name: &str) -> ResultRow {
        ResultRow {
            name: name.to_string(),
            mean_ns: self.mean_ns,
            median_ns: self.median_ns,
            std_dev_ns: self.std_dev_ns,
            total_ns: self.total_ns,
            min_ns: self.min_ns,
            max_ns: self.max_ns,
            iterations: self.iterations,
        }
    }
}

/// Run `work` exactly `iterations` times and aggregate the corrected
/// samples.
///
/// The work runs synchronously, in order, on the calling thread; side
/// effects of `work` carry over between repetitions. Timer overhead is
/// calibrated once per call, immediately before the first repetition. A
/// panic from `work` propagates and nothing is recorded.
pub fn run<F>(name: &str, iterations: u32, mut work: F) -> Result<BenchResult, BenchError>
where
    F: FnMut(),
{
    if iterations == 0 {
        return Err(BenchError::ZeroIterations(name.to_string()));
    }

    let overhead = measure_overhead(RUNNER_CALIBRATION_LOOPS);

    let mut samples = Vec::with_capacity(iterations as usize);
    for _ in 0..iterations {
        let timer = Timer::start();
        work();
        let elapsed = timer.stop() as f64;
        // Clamped at zero: on coarse clocks the calibrated overhead can
        // exceed a fast iteration's raw reading.
        samples.push((elapsed - overhead).max(0.0));
    }

    let summary = compute_summary(&samples)?;

    Ok(BenchResult {
        mean_ns: summary.mean,
        median_ns: summary.median,
        std_dev_ns: summary.std_dev,
        total_ns: summary.total,
        min_ns: summary.min,
        max_ns: summary.max,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_is_invoked_exactly_n_times() {
        let mut count = 0u32;
        let result = run("counting", 25, || count += 1).unwrap();

        assert_eq!(count, 25);
        assert_eq!(result.iterations, 25);
    }

    #[test]
    fn test_zero_iterations_is_rejected_before_any_work() {
        let mut count = 0u32;
        let result = run("empty", 0, || count += 1);

        assert!(matches!(result, Err(BenchError::ZeroIterations(_))));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_aggregates_stay_ordered() {
        let result = run("spin", 50, || {
            let mut sum = 0u64;
            for i in 0..100 {
                sum += i;
            }
            std::hint::black_box(sum);
        })
        .unwrap();

        assert!(result.min_ns <= result.mean_ns);
        assert!(result.mean_ns <= result.max_ns);
        assert!(result.min_ns <= result.median_ns);
        assert!(result.median_ns <= result.max_ns);
        assert!(result.std_dev_ns >= 0.0);
    }

    #[test]
    fn test_samples_are_never_negative() {
        // An empty body is the worst case for overhead correction.
        let result = run("noop", 100, || {}).unwrap();

        assert!(result.min_ns >= 0.0);
    }

    #[test]
    fn test_total_matches_mean_times_count() {
        let result = run("spin", 10, || {
            std::hint::black_box((0..1000).sum::<u64>());
        })
        .unwrap();

        let expected = result.mean_ns * result.iterations as f64;
        assert!((result.total_ns - expected).abs() <= expected.abs() * 1e-9 + 1e-6);
    }
}
