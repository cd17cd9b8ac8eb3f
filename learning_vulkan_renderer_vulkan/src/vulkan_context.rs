/// RenderContext - every object the renderer owns
///
/// Populated once by `VulkanRenderer::initialize`, in dependency order, and
/// released by `destroy` in the reverse order.

use ash::vk;
use learning_vulkan::lv_debug;

use crate::vulkan_depth::DepthResources;
use crate::vulkan_extensions::ExtensionTable;
use crate::vulkan_vertex_buffer::VertexBuffer;

pub struct RenderContext {
    /// Drawable size; overwritten by a surface that dictates its extent
    pub width: u32,
    pub height: u32,

    /// Loader library, kept alive for the instance's lifetime
    pub(crate) _entry: ash::Entry,
    pub instance: ash::Instance,
    pub extensions: ExtensionTable,
    pub debug_callback: Option<vk::DebugReportCallbackEXT>,
    pub surface: vk::SurfaceKHR,

    pub physical_device: vk::PhysicalDevice,
    pub physical_device_properties: vk::PhysicalDeviceProperties,
    pub memory_properties: vk::PhysicalDeviceMemoryProperties,

    pub device: ash::Device,
    pub present_queue: vk::Queue,
    pub present_queue_family: u32,

    pub swapchain_loader: ash::khr::swapchain::Device,
    pub swapchain: vk::SwapchainKHR,
    pub surface_format: vk::SurfaceFormatKHR,
    pub present_mode: vk::PresentModeKHR,
    /// One entry per swapchain image (negotiated count)
    pub images: Vec<vk::Image>,
    pub image_views: Vec<vk::ImageView>,

    pub depth: DepthResources,
    pub render_pass: vk::RenderPass,
    /// One entry per swapchain image
    pub framebuffers: Vec<vk::Framebuffer>,

    pub command_pool: vk::CommandPool,
    pub setup_command_buffer: vk::CommandBuffer,
    /// Reserved for per-frame recording; the present-only frame path leaves it unused
    pub draw_command_buffer: vk::CommandBuffer,
    pub setup_fence: vk::Fence,

    pub vertex_buffer: VertexBuffer,
}

impl RenderContext {
    /// Release every object, children before parents.
    ///
    /// # Safety
    ///
    /// Must be called exactly once; no handle may be used afterwards.
    pub(crate) unsafe fn destroy(&mut self) {
        if let Err(e) = self.device.device_wait_idle() {
            lv_debug!("lv::vulkan", "device_wait_idle failed during teardown: {:?}", e);
        }

        let device = &self.device;
        device.free_command_buffers(
            self.command_pool,
            &[self.setup_command_buffer, self.draw_command_buffer],
        );
        device.destroy_command_pool(self.command_pool, None);
        device.destroy_fence(self.setup_fence, None);

        device.destroy_buffer(self.vertex_buffer.buffer, None);
        device.free_memory(self.vertex_buffer.memory, None);

        for framebuffer in self.framebuffers.drain(..) {
            device.destroy_framebuffer(framebuffer, None);
        }
        device.destroy_render_pass(self.render_pass, None);

        device.destroy_image_view(self.depth.view, None);
        device.destroy_image(self.depth.image, None);
        device.free_memory(self.depth.memory, None);

        for view in self.image_views.drain(..) {
            device.destroy_image_view(view, None);
        }
        // Swapchain images belong to the swapchain
        self.images.clear();
        self.swapchain_loader.destroy_swapchain(self.swapchain, None);

        device.destroy_device(None);
        self.extensions.surface.destroy_surface(self.surface, None);
        self.extensions.destroy_debug_callback(self.debug_callback.take());
        self.instance.destroy_instance(None);
    }
}
