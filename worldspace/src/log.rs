//! Logging for Worldspace
//!
//! Partitions report structural changes (splits, merges) at Debug and
//! per-entity operations at Trace; failed operations are reported at
//! Error with the file and line that raised them. Output goes through a
//! replaceable `Logger` (colored stdout by default) and is filtered by
//! the minimum severity held in `World`.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for log entries
///
/// Install with `World::set_logger` to route partition logs into the
/// server's own log sink.
///
/// ```no_run
/// use worldspace::worldspace::log::{Logger, LogEntry, LogSeverity};
///
/// struct ErrorsOnly;
///
/// impl Logger for ErrorsOnly {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity == LogSeverity::Error {
///             eprintln!("{}: {}", entry.source, entry.message);
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Called once per entry that passed the severity filter
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Creation time
    pub timestamp: SystemTime,

    /// Source module (e.g., "worldspace::World", "worldspace::DynamicQuadTree")
    pub source: String,

    /// Log message
    pub message: String,

    /// Raising file, set by `world_error!` only
    pub file: Option<&'static str>,

    /// Raising line, set by `world_error!` only
    pub line: Option<u32>,
}

/// Severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-operation detail (every insert/remove)
    Trace,

    /// Structural changes (partition, balance)
    Debug,

    /// Lifecycle events (partition registered, world shutdown)
    Info,

    /// Suspicious but recoverable situations
    Warn,

    /// Failed operations (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by DefaultLogger
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Colored stdout logger installed until `World::set_logger` replaces it
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single line (without colors)
    pub fn format_plain(entry: &LogEntry) -> String {
        format!(
            "[{}] [{}] [{}] {}{}",
            Self::timestamp(entry), entry.severity.label(), entry.source, entry.message, Self::location(entry)
        )
    }

    fn timestamp(entry: &LogEntry) -> String {
        let local: DateTime<Local> = entry.timestamp.into();
        local.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }

    /// ` (file:line)` when both are known, empty otherwise
    fn location(entry: &LogEntry) -> String {
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        println!(
            "[{}] [{}] [{}] {}{}",
            Self::timestamp(entry),
            severity,
            entry.source.bright_blue(),
            entry.message,
            Self::location(entry)
        );
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-operation detail)
///
/// # Example
///
/// ```ignore
/// world_trace!("worldspace::DynamicQuadTree", "Inserted {} into {:?}", guid, leaf);
/// ```
#[macro_export]
macro_rules! world_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::worldspace::World::log_enabled($crate::worldspace::log::LogSeverity::Trace) {
            $crate::worldspace::World::log(
                $crate::worldspace::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message (structural changes)
#[macro_export]
macro_rules! world_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::worldspace::World::log_enabled($crate::worldspace::log::LogSeverity::Debug) {
            $crate::worldspace::World::log(
                $crate::worldspace::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (lifecycle events)
#[macro_export]
macro_rules! world_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::worldspace::World::log_enabled($crate::worldspace::log::LogSeverity::Info) {
            $crate::worldspace::World::log(
                $crate::worldspace::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! world_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::worldspace::World::log_enabled($crate::worldspace::log::LogSeverity::Warn) {
            $crate::worldspace::World::log(
                $crate::worldspace::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```ignore
/// world_error!("worldspace::World", "Failed to register partition: {}", error);
/// ```
#[macro_export]
macro_rules! world_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::worldspace::World::log_enabled($crate::worldspace::log::LogSeverity::Error) {
            $crate::worldspace::World::log_detailed(
                $crate::worldspace::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
