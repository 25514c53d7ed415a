//! Log Line Rendering
//!
//! Every emitted line carries a bracketed `[LEVEL timestamp]` tag before
//! the message body. On color terminals the tag is tinted per level.

use chrono::Local;
use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

/// Severity levels for harness log output.
///
/// The ordinals act as a noisiness threshold: a message at level `L` is
/// emitted only when the configured level is `>= L`. `None` sits below
/// every message level and therefore suppresses all output, while `Info`
/// (the highest ordinal) lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Suppress all output.
    None,
    /// Final results tables.
    Result,
    /// Errors.
    Error,
    /// Warnings.
    Warning,
    /// Per-benchmark start and completion notices.
    Info,
}

impl LogLevel {
    /// Tag text used inside the bracketed log prefix.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Result => "RESULT",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
        }
    }

    /// Foreground color used for the tag on color terminals.
    pub fn color(self) -> Color {
        match self {
            LogLevel::None => Color::Black,
            LogLevel::Result => Color::Green,
            LogLevel::Error => Color::Red,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Info => Color::White,
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render the bracketed `[LEVEL timestamp]` tag for one message level.
pub fn format_tag(level: LogLevel, colored: bool) -> String {
    let tag = format!("[{} {}]", level.label(), timestamp());
    if colored {
        tag.color(level.color()).to_string()
    } else {
        tag
    }
}

/// Render one complete log line: tag, a space, the message body.
pub fn format_log_line(message: &str, level: LogLevel, colored: bool) -> String {
    format!("{} {}", format_tag(level, colored), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_order_by_noisiness() {
        assert!(LogLevel::None < LogLevel::Result);
        assert!(LogLevel::Result < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::None.label(), "NONE");
        assert_eq!(LogLevel::Result.label(), "RESULT");
        assert_eq!(LogLevel::Error.label(), "ERROR");
        assert_eq!(LogLevel::Warning.label(), "WARNING");
        assert_eq!(LogLevel::Info.label(), "INFO");
    }

    #[test]
    fn test_plain_line_has_tag_and_message() {
        let line = format_log_line("starting", LogLevel::Info, false);

        assert!(line.starts_with("[INFO "));
        assert!(line.ends_with("] starting"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_tag_carries_a_datetime() {
        let tag = format_tag(LogLevel::Warning, false);

        // "[WARNING YYYY-mm-dd HH:MM:SS]"
        assert_eq!(tag.len(), "[WARNING 2024-01-01 00:00:00]".len());
        assert!(tag.contains('-') && tag.contains(':'));
    }
}
