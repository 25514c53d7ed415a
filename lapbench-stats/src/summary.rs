//! Summary Statistics
//!
//! Six order-stable reductions over a slice of nanosecond samples, plus
//! [`compute_summary`] which bundles them into a single record. `min` and
//! `max` are the only reductions that guard against empty input; the others
//! divide by the sample count and document a non-empty precondition, which
//! `compute_summary` checks once up front.

use crate::StatsError;

/// Summary record for one benchmark's sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Median of a sorted copy of the samples.
    pub median: f64,
    /// Population standard deviation (divides by N, not N-1).
    pub std_dev: f64,
    /// Sum of all samples, accumulated first-to-last.
    pub total: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Number of samples the record was computed from.
    pub sample_count: usize,
}

/// Sum of the samples, accumulated first-to-last.
pub fn sum(samples: &[f64]) -> f64 {
    samples.iter().sum()
}

/// Arithmetic mean. `samples` must be non-empty.
pub fn mean(samples: &[f64]) -> f64 {
    sum(samples) / samples.len() as f64
}

/// Median of a sorted copy of `samples`; the input is never reordered.
///
/// An even count averages the two middle elements, an odd count returns the
/// single middle one. `samples` must be non-empty.
pub fn median(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Population standard deviation: `sqrt(mean((x - mean)^2))`.
/// `samples` must be non-empty.
pub fn std_dev(samples: &[f64]) -> f64 {
    let mean = mean(samples);
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Smallest sample, or [`StatsError::EmptySamples`] for an empty slice.
pub fn min(samples: &[f64]) -> Result<f64, StatsError> {
    samples
        .iter()
        .cloned()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or(StatsError::EmptySamples)
}

/// Largest sample, or [`StatsError::EmptySamples`] for an empty slice.
pub fn max(samples: &[f64]) -> Result<f64, StatsError> {
    samples
        .iter()
        .cloned()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or(StatsError::EmptySamples)
}

/// Reduce one complete sample sequence into its [`Summary`].
///
/// Fails on an empty sequence rather than smoothing it over with zeros or
/// NaN; an empty aggregation is a caller bug.
pub fn compute_summary(samples: &[f64]) -> Result<Summary, StatsError> {
    let min = min(samples)?;
    let max = max(samples)?;

    Ok(Summary {
        mean: mean(samples),
        median: median(samples),
        std_dev: std_dev(samples),
        total: sum(samples),
        min,
        max,
        sample_count: samples.len(),
    })
}
