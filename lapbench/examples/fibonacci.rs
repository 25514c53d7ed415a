//! Lapbench Example Harness
//!
//! Mirrors typical in-application usage: time a recursive function and an
//! inline block that mutates captured state, defer a third benchmark, then
//! dump the results.
//!
//! Run with:
//!   cargo run --release --example fibonacci

use anyhow::Result;
use lapbench::prelude::*;
use std::hint::black_box;

fn fib(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

fn main() -> Result<()> {
    // Log progress and results to the terminal.
    let mut bencher = Bencher::new(LogLevel::Info, LogSink::stdout());

    // Run some code and measure its performance.
    bencher.execute("recursive fibonacci", 100, || {
        black_box(fib(black_box(20)));
    })?;

    // Inline work may close over and mutate caller state between iterations.
    let mut x = 13u64;
    bencher.execute("inline powers", 100, || {
        x = x.wrapping_mul(x).wrapping_add(1);
        black_box(x);
    })?;

    // Defer a benchmark and drain the queue.
    bencher.queue_execution("vector sum", 1000, || {
        let data: Vec<i64> = (0..1000).collect();
        black_box(data.iter().sum::<i64>());
    })?;
    bencher.run_all()?;

    // Equivalent to print_results() here, since the sink is stdout.
    bencher.log_results();

    Ok(())
}
