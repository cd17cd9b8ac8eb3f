/*!
# LearningVulkan - Vulkan Renderer Backend

Vulkan bootstrap for the LearningVulkan triangle, built on `ash` with
`ash-window` for platform surfaces.

`VulkanRenderer::initialize` runs the whole creation sequence (instance,
debug callback, surface, device, swapchain, command buffers, image
transitions, depth buffer, render pass, framebuffers, vertex buffer) and
hands back a ready renderer. The selection logic it relies on is exposed in
`selection` so it can be exercised without a GPU.
*/

mod utility;
mod vulkan_context;
mod vulkan_debug;
mod vulkan_depth;
mod vulkan_device;
mod vulkan_extensions;
mod vulkan_instance;
mod vulkan_render_pass;
mod vulkan_renderer;
mod vulkan_selection;
mod vulkan_setup;
mod vulkan_swapchain;
mod vulkan_vertex_buffer;

pub use utility::Utility;
pub use vulkan_context::RenderContext;
pub use vulkan_depth::DepthResources;
pub use vulkan_extensions::ExtensionTable;
pub use vulkan_renderer::VulkanRenderer;
pub use vulkan_vertex_buffer::VertexBuffer;

/// Pure selection logic used by the bootstrap
pub mod selection {
    pub use crate::vulkan_extensions::{missing_names, platform_surface_entry_point, required_entry_points};
    pub use crate::vulkan_selection::*;
}

/// Debug report sink
pub mod debug {
    pub use crate::vulkan_debug::{debug_report_callback, format_report, report_severity, DEBUG_REPORT_SOURCE};
}
