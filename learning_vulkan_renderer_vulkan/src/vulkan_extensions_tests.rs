//! Unit tests for vulkan_extensions.rs
//!
//! Handle-to-name mapping and presence checks, no GPU required.

use crate::vulkan_extensions::*;
use learning_vulkan::lv::Error;
use raw_window_handle::{
    AppKitDisplayHandle, RawDisplayHandle, WebDisplayHandle, WindowsDisplayHandle,
    XlibDisplayHandle,
};

// ============================================================================
// PLATFORM ENTRY POINT
// ============================================================================

#[test]
fn test_win32_surface_entry_point() {
    let display = RawDisplayHandle::Windows(WindowsDisplayHandle::new());
    assert_eq!(platform_surface_entry_point(display), Some(c"vkCreateWin32SurfaceKHR"));
}

#[test]
fn test_xlib_surface_entry_point() {
    let display = RawDisplayHandle::Xlib(XlibDisplayHandle::new(None, 0));
    assert_eq!(platform_surface_entry_point(display), Some(c"vkCreateXlibSurfaceKHR"));
}

#[test]
fn test_appkit_uses_metal_surface() {
    let display = RawDisplayHandle::AppKit(AppKitDisplayHandle::new());
    assert_eq!(platform_surface_entry_point(display), Some(c"vkCreateMetalSurfaceEXT"));
}

#[test]
fn test_web_has_no_surface_entry_point() {
    let display = RawDisplayHandle::Web(WebDisplayHandle::new());
    assert_eq!(platform_surface_entry_point(display), None);
}

// ============================================================================
// REQUIRED ENTRY POINTS
// ============================================================================

#[test]
fn test_required_entry_points_with_debug_report() {
    let display = RawDisplayHandle::Windows(WindowsDisplayHandle::new());
    let names = required_entry_points(display, true).unwrap();

    assert!(names.contains(&c"vkCreateWin32SurfaceKHR"));
    assert!(names.contains(&c"vkGetPhysicalDeviceSurfaceSupportKHR"));
    assert!(names.contains(&c"vkCreateDebugReportCallbackEXT"));
    assert!(names.contains(&c"vkDestroyDebugReportCallbackEXT"));
}

#[test]
fn test_required_entry_points_without_debug_report() {
    let display = RawDisplayHandle::Xlib(XlibDisplayHandle::new(None, 0));
    let names = required_entry_points(display, false).unwrap();

    assert!(names.contains(&c"vkCreateXlibSurfaceKHR"));
    assert!(!names.contains(&c"vkCreateDebugReportCallbackEXT"));
}

#[test]
fn test_required_entry_points_unsupported_platform() {
    let display = RawDisplayHandle::Web(WebDisplayHandle::new());
    assert!(matches!(
        required_entry_points(display, true),
        Err(Error::CapabilityNotFound(_))
    ));
}

// ============================================================================
// PRESENCE CHECK
// ============================================================================

#[test]
fn test_missing_names_reports_absent_in_order() {
    let available = [c"VK_KHR_surface", c"VK_KHR_win32_surface"];
    let required = [c"VK_KHR_surface", c"VK_EXT_debug_report", c"VK_KHR_win32_surface", c"VK_X"];
    assert_eq!(
        missing_names(&available, &required),
        vec![c"VK_EXT_debug_report", c"VK_X"]
    );
}

#[test]
fn test_missing_names_all_present() {
    let available = [c"VK_LAYER_KHRONOS_validation"];
    assert!(missing_names(&available, &[c"VK_LAYER_KHRONOS_validation"]).is_empty());
}
