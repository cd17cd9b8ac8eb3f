//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry, DefaultLogger and the global Log facade.

use crate::log::{DefaultLogger, Log, LogEntry, LogSeverity, Logger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Logger that captures entries for inspection
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

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
    assert_eq!(LogSeverity::Error.label(), "ERROR");
}

// ============================================================================
// DEFAULT LOGGER
// ============================================================================

#[test]
fn test_default_logger_handles_all_shapes() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "lv::test".to_string(),
        message: "plain entry".to_string(),
        file: None,
        line: None,
    });
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "lv::test".to_string(),
        message: "detailed entry".to_string(),
        file: Some("log_tests.rs"),
        line: Some(42),
    });
}

// ============================================================================
// GLOBAL LOG FACADE
// ============================================================================

#[test]
#[serial]
fn test_macros_route_to_custom_logger() {
    let entries = install_capture();

    crate::lv_debug!("lv::test", "debug {}", 1);
    crate::lv_warn!("lv::test", "warn {}", 2);

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].severity, LogSeverity::Debug);
        assert_eq!(entries[0].message, "debug 1");
        assert_eq!(entries[1].severity, LogSeverity::Warn);
        assert!(entries[1].file.is_none());
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_records_file_and_line() {
    let entries = install_capture();

    crate::lv_error!("lv::test", "boom");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Error);
        assert_eq!(entries[0].source, "lv::test");
        assert!(entries[0].file.unwrap().ends_with("log_tests.rs"));
        assert!(entries[0].line.is_some());
    }

    Log::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let entries = install_capture();
    Log::reset_logger();

    crate::lv_info!("lv::test", "not captured");

    assert!(entries.lock().unwrap().is_empty());
}
