/// Extension table - instance-scoped loaders for the non-core entry points
///
/// The surface and debug-report functions are not part of the core API and
/// must be looked up per instance. The table owns those loaders; nothing is
/// stored in process-wide state.

use ash::vk;
use learning_vulkan::lv::Result;
use learning_vulkan::lv_debug;
use raw_window_handle::RawDisplayHandle;
use std::ffi::CStr;

use crate::utility::Utility;

/// Surface-extension entry points used by the bootstrap
const SURFACE_ENTRY_POINTS: [&CStr; 5] = [
    c"vkDestroySurfaceKHR",
    c"vkGetPhysicalDeviceSurfaceSupportKHR",
    c"vkGetPhysicalDeviceSurfaceCapabilitiesKHR",
    c"vkGetPhysicalDeviceSurfaceFormatsKHR",
    c"vkGetPhysicalDeviceSurfacePresentModesKHR",
];

/// Debug-report entry points
const DEBUG_REPORT_ENTRY_POINTS: [&CStr; 2] = [
    c"vkCreateDebugReportCallbackEXT",
    c"vkDestroyDebugReportCallbackEXT",
];

/// Platform surface-creation function for a display handle
pub fn platform_surface_entry_point(display: RawDisplayHandle) -> Option<&'static CStr> {
    match display {
        RawDisplayHandle::Windows(_) => Some(c"vkCreateWin32SurfaceKHR"),
        RawDisplayHandle::Xlib(_) => Some(c"vkCreateXlibSurfaceKHR"),
        RawDisplayHandle::Xcb(_) => Some(c"vkCreateXcbSurfaceKHR"),
        RawDisplayHandle::Wayland(_) => Some(c"vkCreateWaylandSurfaceKHR"),
        RawDisplayHandle::Android(_) => Some(c"vkCreateAndroidSurfaceKHR"),
        RawDisplayHandle::AppKit(_) | RawDisplayHandle::UiKit(_) => Some(c"vkCreateMetalSurfaceEXT"),
        _ => None,
    }
}

/// Every entry point that must resolve for the given display
pub fn required_entry_points(
    display: RawDisplayHandle,
    enable_debug_report: bool,
) -> Result<Vec<&'static CStr>> {
    let platform = platform_surface_entry_point(display).ok_or_else(|| {
        Utility::capability_not_found(format!("Unsupported windowing platform: {:?}", display))
    })?;

    let mut names = SURFACE_ENTRY_POINTS.to_vec();
    names.push(platform);
    if enable_debug_report {
        names.extend_from_slice(&DEBUG_REPORT_ENTRY_POINTS);
    }
    Ok(names)
}

/// Names from `required` that do not appear in `available`, in order
pub fn missing_names<'a>(available: &[&CStr], required: &[&'a CStr]) -> Vec<&'a CStr> {
    required
        .iter()
        .copied()
        .filter(|name| !available.iter().any(|present| *present == *name))
        .collect()
}

/// Surface, platform-surface and (optionally) debug-report extension names
pub fn required_instance_extensions(
    display: RawDisplayHandle,
    enable_debug_report: bool,
) -> Result<Vec<&'static CStr>> {
    let raw = Utility::check_vulkan_result(
        ash_window::enumerate_required_extensions(display),
        "Failed to query platform surface extensions",
    )?;

    // ash-window hands out pointers to 'static extension name constants
    let mut names: Vec<&'static CStr> =
        raw.iter().map(|&ptr| unsafe { CStr::from_ptr(ptr) }).collect();

    if enable_debug_report {
        names.push(ash::ext::debug_report::NAME);
    }
    Ok(names)
}

/// Loaders for the instance-level extensions
pub struct ExtensionTable {
    pub surface: ash::khr::surface::Instance,
    pub debug_report: Option<ash::ext::debug_report::Instance>,
}

impl ExtensionTable {
    /// Resolve every extension entry point on `instance`, then build the loaders.
    pub fn load(
        entry: &ash::Entry,
        instance: &ash::Instance,
        display: RawDisplayHandle,
        enable_debug_report: bool,
    ) -> Result<Self> {
        for name in required_entry_points(display, enable_debug_report)? {
            let resolved = unsafe { entry.get_instance_proc_addr(instance.handle(), name.as_ptr()) };
            if resolved.is_none() {
                return Err(Utility::capability_not_found(format!(
                    "Failed to resolve extension entry point {:?}",
                    name
                )));
            }
            lv_debug!("lv::vulkan", "Resolved {:?}", name);
        }

        Ok(Self {
            surface: ash::khr::surface::Instance::new(entry, instance),
            debug_report: enable_debug_report
                .then(|| ash::ext::debug_report::Instance::new(entry, instance)),
        })
    }

    /// Device-level swapchain loader
    pub fn swapchain_loader(
        instance: &ash::Instance,
        device: &ash::Device,
    ) -> ash::khr::swapchain::Device {
        ash::khr::swapchain::Device::new(instance, device)
    }

    /// Destroy a debug callback, if one was registered
    pub fn destroy_debug_callback(&self, callback: Option<vk::DebugReportCallbackEXT>) {
        if let (Some(loader), Some(callback)) = (&self.debug_report, callback) {
            unsafe { loader.destroy_debug_report_callback(callback, None) };
        }
    }
}

#[cfg(test)]
#[path = "vulkan_extensions_tests.rs"]
mod tests;
