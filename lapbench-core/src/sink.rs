//! Log Sink Configuration
//!
//! The sink is an explicit two-state value: `Disabled` is the intentional
//! opt-out, `Enabled` carries the writer plus whether it accepts ANSI
//! color. The harness writes to the sink but never owns its lifecycle, and
//! a sink that stops accepting writes degrades to a no-op.

use std::io::{self, IsTerminal, Write};

/// Destination for harness log output.
pub enum LogSink {
    /// Logging intentionally turned off; every emit is a silent no-op.
    Disabled,
    /// Logging enabled.
    Enabled {
        /// Where log lines are written.
        writer: Box<dyn Write>,
        /// Whether the destination renders ANSI color codes.
        color: bool,
    },
}

impl LogSink {
    /// A sink writing to standard output, colored when it is a terminal.
    pub fn stdout() -> Self {
        LogSink::Enabled {
            writer: Box::new(io::stdout()),
            color: io::stdout().is_terminal(),
        }
    }

    /// A sink writing to standard error, colored when it is a terminal.
    pub fn stderr() -> Self {
        LogSink::Enabled {
            writer: Box::new(io::stderr()),
            color: io::stderr().is_terminal(),
        }
    }

    /// A sink writing to an arbitrary destination, never colored.
    pub fn writer<W: Write + 'static>(writer: W) -> Self {
        LogSink::Enabled {
            writer: Box::new(writer),
            color: false,
        }
    }

    /// The intentional opt-out.
    pub fn disabled() -> Self {
        LogSink::Disabled
    }

    pub(crate) fn is_enabled(&self) -> bool {
        matches!(self, LogSink::Enabled { .. })
    }

    pub(crate) fn color(&self) -> bool {
        match self {
            LogSink::Disabled => false,
            LogSink::Enabled { color, .. } => *color,
        }
    }

    /// Write one line, appending a newline. Write errors are discarded.
    pub(crate) fn write_line(&mut self, line: &str) {
        if let LogSink::Enabled { writer, .. } = self {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sink_swallows_writes() {
        let mut sink = LogSink::disabled();
        sink.write_line("dropped");

        assert!(!sink.is_enabled());
        assert!(!sink.color());
    }

    #[test]
    fn test_writer_sink_captures_lines() {
        let mut sink = LogSink::writer(Vec::new());
        sink.write_line("hello");

        assert!(sink.is_enabled());
        assert!(!sink.color());
    }

    #[test]
    fn test_failing_writer_is_tolerated() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
        }

        let mut sink = LogSink::writer(Broken);
        sink.write_line("never lands");
    }
}
