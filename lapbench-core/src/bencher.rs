//! Bencher - Registry and FIFO Scheduler
//!
//! Owns the result set keyed by benchmark name, the deferred-execution
//! queue, and the logging configuration. All execution happens in-line on
//! the calling thread; the registry is not synchronized.

use crate::BenchError;
use crate::runner::{self, BenchResult};
use crate::sink::LogSink;
use fxhash::FxHashMap;
use lapbench_report::{
    LogLevel, ResultRow, format_duration, format_log_line, render_results_block, render_table,
};
use std::collections::VecDeque;

/// A deferred unit of work, consumed from the queue front by `run_all`.
struct QueuedBenchmark {
    name: String,
    iterations: u32,
    work: Box<dyn FnMut()>,
}

/// The benchmark registry and scheduler.
///
/// Results are keyed by benchmark name and unconditionally overwritten on
/// re-execution. The queue drains strictly first-in-first-out. Not
/// thread-safe; callers serialize access externally.
pub struct Bencher {
    results: FxHashMap<String, BenchResult>,
    queue: VecDeque<QueuedBenchmark>,
    level: LogLevel,
    sink: LogSink,
}

impl Bencher {
    /// Create a harness with a severity threshold and an output sink.
    ///
    /// A `LogLevel::None` threshold forces the sink to `Disabled`, so no
    /// output can be produced regardless of how the sink was configured.
    pub fn new(level: LogLevel, sink: LogSink) -> Self {
        let sink = if level == LogLevel::None {
            LogSink::Disabled
        } else {
            sink
        };

        Self {
            results: FxHashMap::default(),
            queue: VecDeque::new(),
            level,
            sink,
        }
    }

    /// Threshold check shared by every emitting path: passes only when the
    /// sink is enabled and the configured level is at or above `level`.
    fn should_log(&self, level: LogLevel) -> bool {
        self.sink.is_enabled() && self.level >= level
    }

    /// Run a benchmark immediately and record its result under `name`.
    ///
    /// Emits start and completion notices at `Info`. Any prior result for
    /// `name` is replaced. A panic from `work` propagates to the caller and
    /// leaves no record for this attempt.
    pub fn execute<F>(&mut self, name: &str, iterations: u32, mut work: F) -> Result<(), BenchError>
    where
        F: FnMut(),
    {
        self.log(&format!("Executing benchmark: {}", name), LogLevel::Info);

        let result = runner::run(name, iterations, &mut work)?;
        let mean_ns = result.mean_ns;
        self.results.insert(name.to_string(), result);

        self.log(
            &format!(
                "Done running benchmark: {} average is {}",
                name,
                format_duration(mean_ns)
            ),
            LogLevel::Info,
        );
        Ok(())
    }

    /// Defer a benchmark for a later [`run_all`](Self::run_all) drain.
    ///
    /// The iteration count is validated up front; nothing executes here.
    pub fn queue_execution<F>(
        &mut self,
        name: &str,
        iterations: u32,
        work: F,
    ) -> Result<(), BenchError>
    where
        F: FnMut() + 'static,
    {
        if iterations == 0 {
            return Err(BenchError::ZeroIterations(name.to_string()));
        }

        self.queue.push_back(QueuedBenchmark {
            name: name.to_string(),
            iterations,
            work: Box::new(work),
        });
        Ok(())
    }

    /// Drain the deferred queue strictly first-in-first-out via
    /// [`execute`](Self::execute).
    ///
    /// An error aborts the drain: entries not yet reached stay queued and
    /// previously recorded results are untouched.
    pub fn run_all(&mut self) -> Result<(), BenchError> {
        while let Some(mut queued) = self.queue.pop_front() {
            self.execute(&queued.name, queued.iterations, &mut *queued.work)?;
        }
        Ok(())
    }

    /// Number of benchmarks still waiting in the deferred queue.
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// The recorded result for `name`, if it has been executed.
    pub fn result(&self, name: &str) -> Option<&BenchResult> {
        self.results.get(name)
    }

    /// All recorded results, keyed by benchmark name.
    pub fn results(&self) -> &FxHashMap<String, BenchResult> {
        &self.results
    }

    /// Snapshot the result set as name-sorted report rows.
    pub fn report_rows(&self) -> Vec<ResultRow> {
        let mut rows: Vec<ResultRow> = self
            .results
            .iter()
            .map(|(name, result)| result.to_row(name))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    /// Print the full results table to stdout, unconditionally.
    pub fn print_results(&self) {
        print!("{}", render_table(&self.report_rows()));
    }

    /// Write the results table to the configured sink, gated by the
    /// `Result` severity check. A no-op when gated out or when logging is
    /// disabled.
    pub fn log_results(&mut self) {
        if !self.should_log(LogLevel::Result) {
            return;
        }

        let block = render_results_block(&self.report_rows(), self.sink.color());
        self.sink.write_line(&block);
    }

    /// Emit one message through the severity filter.
    ///
    /// Never fails: messages below the threshold and sink write errors are
    /// both silently dropped.
    pub fn log(&mut self, message: &str, level: LogLevel) {
        if !self.should_log(level) {
            return;
        }

        let line = format_log_line(message, level, self.sink.color());
        self.sink.write_line(&line);
    }
}
