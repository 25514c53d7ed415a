//! Duration Humanization
//!
//! Renders nanosecond durations at a human scale. The unit boundaries are
//! fixed thresholds on the absolute value; a value sitting exactly on a
//! threshold renders in the larger unit.

const NS_PER_MS: f64 = 1e6;
const NS_PER_SEC: f64 = 1e9;
const NS_PER_MIN: f64 = 6e10;
const NS_PER_HOUR: f64 = 3.6e12;
const NS_PER_DAY: f64 = 8.64e13;

/// Format a nanosecond duration with two decimals in the smallest unit
/// that keeps the value readable.
pub fn format_duration(ns: f64) -> String {
    let abs = ns.abs();

    if abs < NS_PER_MS {
        format!("{:.2}ns", ns)
    } else if abs < NS_PER_SEC {
        format!("{:.2}ms", ns / NS_PER_MS)
    } else if abs < NS_PER_MIN {
        format!("{:.2}s", ns / NS_PER_SEC)
    } else if abs < NS_PER_HOUR {
        format!("{:.2}min", ns / NS_PER_MIN)
    } else if abs < NS_PER_DAY {
        format!("{:.2}h", ns / NS_PER_HOUR)
    } else {
        format!("{:.2}days", ns / NS_PER_DAY)
    }
}
