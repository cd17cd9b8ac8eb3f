//! Integration tests for the logging system
//!
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use learning_vulkan::lv::log::{LogEntry, LogSeverity, Logger};
use learning_vulkan::lv::Log;
use learning_vulkan::{lv_error, lv_info, lv_trace};
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Test logger that captures entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_integration_custom_logger_receives_macro_output() {
    let (logger, entries) = TestLogger::new();
    Log::set_logger(logger);

    lv_trace!("lv::test", "trace {}", "a");
    lv_info!("lv::test", "info {}", 2);
    lv_error!("lv::test", "error {}", 3.5);

    Log::reset_logger();

    let entries = entries.lock().unwrap();
    let severities: Vec<LogSeverity> = entries.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![LogSeverity::Trace, LogSeverity::Info, LogSeverity::Error]
    );
    assert_eq!(entries[2].message, "error 3.5");
    assert!(entries[2].line.is_some());
    assert!(entries[0].line.is_none());
}

#[test]
#[serial]
fn test_integration_direct_log_calls() {
    let (logger, entries) = TestLogger::new();
    Log::set_logger(logger);

    Log::log(LogSeverity::Warn, "lv::vulkan", "plain".to_string());
    Log::log_detailed(LogSeverity::Error, "lv::vulkan", "detailed".to_string(), "file.rs", 9);

    Log::reset_logger();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].file, Some("file.rs"));
    assert_eq!(entries[1].line, Some(9));
}
