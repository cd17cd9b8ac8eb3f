//! Renderer configuration

/// Standard validation layer required when validation is enabled
pub const KHRONOS_VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// API version triple (major, minor, patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ApiVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name reported to the driver
    pub app_name: String,
    /// Application version
    pub app_version: ApiVersion,
    /// Engine name reported to the driver
    pub engine_name: String,
    /// Engine version (plain integer, as reported in the application info)
    pub engine_version: u32,
    /// Requested API version
    pub api_version: ApiVersion,
    /// Require and enable the validation layer
    pub enable_validation: bool,
    /// Name of the validation layer to require
    pub validation_layer: String,
    /// Require the debug-report extension and register the callback
    pub enable_debug_report: bool,
    /// Swapchain image count before clamping to the surface limits
    pub desired_image_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Learning Vulkan".to_string(),
            app_version: ApiVersion::new(1, 0, 0),
            engine_name: "Unknown".to_string(),
            engine_version: 1,
            api_version: ApiVersion::new(1, 1, 82),
            enable_validation: cfg!(debug_assertions),
            validation_layer: KHRONOS_VALIDATION_LAYER.to_string(),
            enable_debug_report: true,
            desired_image_count: 2,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
