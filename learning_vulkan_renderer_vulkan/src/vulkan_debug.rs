/// Debug report callback - forwards layer messages to the logger
///
/// The callback is a passive sink: every report is logged, none is filtered,
/// and it always returns `VK_FALSE` so the reporting layer never aborts the
/// call that triggered it.

use ash::vk;
use learning_vulkan::lv::log::LogSeverity;
use learning_vulkan::lv::Log;
use std::ffi::{c_char, c_void, CStr};

/// Source tag for layer messages
pub const DEBUG_REPORT_SOURCE: &str = "lv::vulkan::debug_report";

/// Log severity for a set of report flags (most severe flag wins)
pub fn report_severity(flags: vk::DebugReportFlagsEXT) -> LogSeverity {
    if flags.contains(vk::DebugReportFlagsEXT::ERROR) {
        LogSeverity::Error
    } else if flags.intersects(
        vk::DebugReportFlagsEXT::WARNING | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING,
    ) {
        LogSeverity::Warn
    } else if flags.contains(vk::DebugReportFlagsEXT::INFORMATION) {
        LogSeverity::Info
    } else {
        LogSeverity::Debug
    }
}

/// One line carrying every field the layer reported
pub fn format_report(
    object_type: vk::DebugReportObjectTypeEXT,
    object: u64,
    location: usize,
    message_code: i32,
    layer_prefix: &str,
    message: &str,
) -> String {
    format!(
        "[{}] {:?} {:#x} (location {}, code {}): {}",
        layer_prefix, object_type, object, location, message_code, message
    )
}

/// Report every category the extension knows about
pub fn callback_create_info() -> vk::DebugReportCallbackCreateInfoEXT<'static> {
    vk::DebugReportCallbackCreateInfoEXT::default()
        .flags(
            vk::DebugReportFlagsEXT::ERROR
                | vk::DebugReportFlagsEXT::WARNING
                | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING
                | vk::DebugReportFlagsEXT::INFORMATION
                | vk::DebugReportFlagsEXT::DEBUG,
        )
        .pfn_callback(Some(debug_report_callback))
}

unsafe fn lossy<'a>(ptr: *const c_char, fallback: &'a str) -> std::borrow::Cow<'a, str> {
    if ptr.is_null() {
        fallback.into()
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}

/// Debug report callback registered on the instance
pub unsafe extern "system" fn debug_report_callback(
    flags: vk::DebugReportFlagsEXT,
    object_type: vk::DebugReportObjectTypeEXT,
    object: u64,
    location: usize,
    message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    let layer_prefix = lossy(p_layer_prefix, "Unknown");
    let message = lossy(p_message, "No message");

    Log::log(
        report_severity(flags),
        DEBUG_REPORT_SOURCE,
        format_report(object_type, object, location, message_code, &layer_prefix, &message),
    );

    vk::FALSE
}

#[cfg(test)]
#[path = "vulkan_debug_tests.rs"]
mod tests;
