//! Unit tests for vulkan_debug.rs
//!
//! The callback is invoked directly with hand-built arguments.

use crate::vulkan_debug::*;
use ash::vk;
use learning_vulkan::lv::log::{LogEntry, LogSeverity, Logger};
use learning_vulkan::lv::Log;
use serial_test::serial;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Other tests log concurrently through the same global logger
        if entry.source == DEBUG_REPORT_SOURCE {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// SEVERITY MAPPING
// ============================================================================

#[test]
fn test_report_severity_mapping() {
    assert_eq!(report_severity(vk::DebugReportFlagsEXT::ERROR), LogSeverity::Error);
    assert_eq!(report_severity(vk::DebugReportFlagsEXT::WARNING), LogSeverity::Warn);
    assert_eq!(
        report_severity(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING),
        LogSeverity::Warn
    );
    assert_eq!(report_severity(vk::DebugReportFlagsEXT::INFORMATION), LogSeverity::Info);
    assert_eq!(report_severity(vk::DebugReportFlagsEXT::DEBUG), LogSeverity::Debug);
}

#[test]
fn test_report_severity_most_severe_wins() {
    let flags = vk::DebugReportFlagsEXT::WARNING | vk::DebugReportFlagsEXT::ERROR;
    assert_eq!(report_severity(flags), LogSeverity::Error);
}

// ============================================================================
// FORMATTING
// ============================================================================

#[test]
fn test_format_report_contains_every_field() {
    let line = format_report(
        vk::DebugReportObjectTypeEXT::IMAGE,
        0xdead,
        17,
        -3,
        "Validation",
        "Image layout mismatch",
    );
    assert!(line.contains("Validation"));
    assert!(line.contains("IMAGE"));
    assert!(line.contains("0xdead"));
    assert!(line.contains("location 17"));
    assert!(line.contains("code -3"));
    assert!(line.ends_with("Image layout mismatch"));
}

#[test]
fn test_callback_create_info_reports_everything() {
    let info = callback_create_info();
    assert!(info.flags.contains(vk::DebugReportFlagsEXT::ERROR));
    assert!(info.flags.contains(vk::DebugReportFlagsEXT::DEBUG));
    assert!(info.flags.contains(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING));
    assert!(info.pfn_callback.is_some());
}

// ============================================================================
// CALLBACK
// ============================================================================

#[test]
#[serial]
fn test_callback_logs_and_never_aborts() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(CaptureLogger { entries: entries.clone() });

    let result = unsafe {
        debug_report_callback(
            vk::DebugReportFlagsEXT::ERROR,
            vk::DebugReportObjectTypeEXT::DEVICE,
            42,
            0,
            7,
            c"Validation".as_ptr(),
            c"vkCreateDevice: bad feature".as_ptr(),
            std::ptr::null_mut(),
        )
    };

    Log::reset_logger();

    assert_eq!(result, vk::FALSE);
    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert_eq!(entries[0].source, DEBUG_REPORT_SOURCE);
    assert!(entries[0].message.contains("vkCreateDevice: bad feature"));
}

#[test]
#[serial]
fn test_callback_tolerates_null_strings() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(CaptureLogger { entries: entries.clone() });

    let result = unsafe {
        debug_report_callback(
            vk::DebugReportFlagsEXT::INFORMATION,
            vk::DebugReportObjectTypeEXT::UNKNOWN,
            0,
            0,
            0,
            std::ptr::null(),
            std::ptr::null(),
            std::ptr::null_mut(),
        )
    };

    Log::reset_logger();

    assert_eq!(result, vk::FALSE);
    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert!(entries[0].message.contains("Unknown"));
    assert!(entries[0].message.contains("No message"));
}
