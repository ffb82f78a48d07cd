//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "worldspace::DynamicQuadTree".to_string(),
        message: "Partitioned node".to_string(),
        file,
        line,
    }
}

#[test]
fn test_format_plain_without_file_line() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Debug, None, None));
    assert!(line.contains("[DEBUG]"));
    assert!(line.contains("[worldspace::DynamicQuadTree]"));
    assert!(line.ends_with("Partitioned node"));
}

#[test]
fn test_format_plain_with_file_line() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("tree.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(tree.rs:42)"));
}

#[test]
fn test_format_plain_ignores_partial_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Warn, Some("tree.rs"), None));
    assert!(!line.contains("tree.rs"));
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
fn test_custom_logger_receives_entry() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let logger = CaptureLogger { entries: entries.clone() };

    logger.log(&entry(LogSeverity::Info, None, None));

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Partitioned node");
}

#[test]
fn test_default_logger_as_trait_object() {
    let logger: Box<dyn Logger> = Box::new(DefaultLogger);
    logger.log(&entry(LogSeverity::Trace, None, None));
}
