/// VulkanRenderer - one-shot bootstrap plus the per-frame present

use ash::vk;
use learning_vulkan::lv::{Config, Renderer, Result, TRIANGLE};
use learning_vulkan::{lv_debug, lv_info, lv_warn};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::utility::Utility;
use crate::vulkan_context::RenderContext;
use crate::vulkan_debug::callback_create_info;
use crate::vulkan_depth::create_depth_resources;
use crate::vulkan_device::{create_logical_device, select_physical_device};
use crate::vulkan_extensions::ExtensionTable;
use crate::vulkan_instance::create_instance;
use crate::vulkan_render_pass::{create_framebuffers, create_render_pass};
use crate::vulkan_swapchain::{
    create_image_views, create_swapchain, present, transition_swapchain_images,
};
use crate::vulkan_vertex_buffer::create_vertex_buffer;

/// Vulkan renderer for the single hardcoded triangle
///
/// A value of this type only exists once initialization has fully succeeded.
/// Dropping it releases every owned object.
pub struct VulkanRenderer {
    context: RenderContext,
}

impl VulkanRenderer {
    /// Run the full bootstrap for `window` at the requested size.
    ///
    /// Stops at the first failing step. The surface may override
    /// `width`/`height`; the context stores what the swapchain actually uses.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use learning_vulkan::lv::Config;
    /// use learning_vulkan_renderer_vulkan::VulkanRenderer;
    /// # fn demo(window: &winit::window::Window) -> learning_vulkan::lv::Result<()> {
    /// let mut renderer = VulkanRenderer::initialize(1280, 720, window, Config::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn initialize<W: HasDisplayHandle + HasWindowHandle>(
        width: u32,
        height: u32,
        window: &W,
        config: Config,
    ) -> Result<Self> {
        let display = window
            .display_handle()
            .map_err(|e| {
                Utility::capability_not_found(format!("Failed to get display handle: {}", e))
            })?
            .as_raw();
        let window_handle = window
            .window_handle()
            .map_err(|e| {
                Utility::capability_not_found(format!("Failed to get window handle: {}", e))
            })?
            .as_raw();

        unsafe {
            // Instance and extension entry points
            let entry = ash::Entry::load().map_err(|e| {
                Utility::capability_not_found(format!("Failed to load Vulkan library: {}", e))
            })?;
            let instance = create_instance(&entry, &config, display)?;
            let extensions =
                ExtensionTable::load(&entry, &instance, display, config.enable_debug_report)?;

            // Debug callback
            let debug_callback = match &extensions.debug_report {
                Some(loader) => Some(Utility::check_vulkan_result(
                    loader.create_debug_report_callback(&callback_create_info(), None),
                    "Failed to register debug report callback",
                )?),
                None => None,
            };

            // Surface
            let surface = Utility::check_vulkan_result(
                ash_window::create_surface(&entry, &instance, display, window_handle, None),
                "Failed to create platform surface",
            )?;

            // Physical and logical device
            let selected = select_physical_device(&instance, &extensions.surface, surface)?;
            let device = create_logical_device(&instance, &selected)?;

            // Swapchain
            let swapchain_loader = ExtensionTable::swapchain_loader(&instance, &device);
            let (swapchain, plan) = create_swapchain(
                &extensions.surface,
                &swapchain_loader,
                selected.physical_device,
                surface,
                config.desired_image_count,
                width,
                height,
            )?;
            if (plan.extent.width, plan.extent.height) != (width, height) {
                lv_warn!(
                    "lv::vulkan",
                    "Surface dictates {}x{}, overriding requested {}x{}",
                    plan.extent.width,
                    plan.extent.height,
                    width,
                    height
                );
            }

            // Queue, command pool and the setup/draw command buffers
            let present_queue = device.get_device_queue(selected.queue_family_index, 0);
            let pool_info = vk::CommandPoolCreateInfo::default()
                .queue_family_index(selected.queue_family_index)
                .flags(vk::CommandPoolCreateFlags::RESET_COMMAND_BUFFER);
            let command_pool = Utility::check_vulkan_result(
                device.create_command_pool(&pool_info, None),
                "Failed to create command pool",
            )?;
            let allocate_info = vk::CommandBufferAllocateInfo::default()
                .command_pool(command_pool)
                .level(vk::CommandBufferLevel::PRIMARY)
                .command_buffer_count(2);
            let command_buffers = Utility::check_vulkan_result(
                device.allocate_command_buffers(&allocate_info),
                "Failed to allocate command buffers",
            )?;
            let (setup_command_buffer, draw_command_buffer) =
                (command_buffers[0], command_buffers[1]);
            let setup_fence = Utility::check_vulkan_result(
                device.create_fence(&vk::FenceCreateInfo::default(), None),
                "Failed to create setup fence",
            )?;

            // Swapchain images: present layout, then views
            let images = Utility::check_vulkan_result(
                swapchain_loader.get_swapchain_images(swapchain),
                "Failed to get swapchain images",
            )?;
            lv_info!("lv::vulkan", "Swapchain provides {} images", images.len());
            transition_swapchain_images(
                &device,
                &swapchain_loader,
                present_queue,
                swapchain,
                &images,
                setup_command_buffer,
                setup_fence,
            )?;
            let image_views = create_image_views(&device, &images, plan.surface_format.format)?;

            // Depth buffer, render pass, framebuffers
            let depth = create_depth_resources(
                &device,
                &selected.memory_properties,
                present_queue,
                setup_command_buffer,
                setup_fence,
                plan.extent,
            )?;
            let render_pass = create_render_pass(&device, plan.surface_format.format)?;
            let framebuffers =
                create_framebuffers(&device, render_pass, &image_views, depth.view, plan.extent)?;

            // Triangle
            let vertex_buffer =
                create_vertex_buffer(&device, &selected.memory_properties, &TRIANGLE)?;

            lv_info!(
                "lv::vulkan",
                "Renderer ready: {}x{}, {} framebuffers",
                plan.extent.width,
                plan.extent.height,
                framebuffers.len()
            );

            Ok(Self {
                context: RenderContext {
                    width: plan.extent.width,
                    height: plan.extent.height,
                    _entry: entry,
                    instance,
                    extensions,
                    debug_callback,
                    surface,
                    physical_device: selected.physical_device,
                    physical_device_properties: selected.properties,
                    memory_properties: selected.memory_properties,
                    device,
                    present_queue,
                    present_queue_family: selected.queue_family_index,
                    swapchain_loader,
                    swapchain,
                    surface_format: plan.surface_format,
                    present_mode: plan.present_mode,
                    images,
                    image_views,
                    depth,
                    render_pass,
                    framebuffers,
                    command_pool,
                    setup_command_buffer,
                    draw_command_buffer,
                    setup_fence,
                    vertex_buffer,
                },
            })
        }
    }

    /// Read-only view of every owned object
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Number of swapchain images (and framebuffers)
    pub fn image_count(&self) -> usize {
        self.context.images.len()
    }

    pub fn surface_format(&self) -> vk::SurfaceFormatKHR {
        self.context.surface_format
    }

    pub fn present_mode(&self) -> vk::PresentModeKHR {
        self.context.present_mode
    }

    pub fn device_name(&self) -> String {
        self.context
            .physical_device_properties
            .device_name_as_c_str()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Renderer for VulkanRenderer {
    /// Acquire the next image and present it straight back.
    ///
    /// No semaphore or fence guards the acquire and nothing is submitted, so
    /// this is only sound with a single frame in flight.
    fn render(&mut self) -> Result<()> {
        let context = &self.context;
        let (index, suboptimal) = Utility::check_vulkan_result(
            unsafe {
                context.swapchain_loader.acquire_next_image(
                    context.swapchain,
                    u64::MAX,
                    vk::Semaphore::null(),
                    vk::Fence::null(),
                )
            },
            "Failed to acquire next swapchain image",
        )?;
        if suboptimal {
            lv_warn!("lv::vulkan", "Swapchain is suboptimal for the surface");
        }
        present(&context.swapchain_loader, context.present_queue, context.swapchain, index)
    }

    fn extent(&self) -> (u32, u32) {
        (self.context.width, self.context.height)
    }
}

impl Drop for VulkanRenderer {
    fn drop(&mut self) {
        lv_debug!("lv::vulkan", "Destroying renderer");
        unsafe { self.context.destroy() };
    }
}
