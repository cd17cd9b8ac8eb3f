/// Depth buffer - D16 image in device-local memory plus its view

use ash::vk;
use learning_vulkan::lv::Result;
use learning_vulkan::lv_debug;

use crate::utility::Utility;
use crate::vulkan_selection::{find_memory_type_index, DEPTH_FORMAT};
use crate::vulkan_setup::SetupSubmission;

/// Depth image, its memory and its view
#[derive(Debug, Clone, Copy)]
pub struct DepthResources {
    pub image: vk::Image,
    pub memory: vk::DeviceMemory,
    pub view: vk::ImageView,
}

/// Single-sample, optimally tiled 2D depth attachment
pub fn depth_image_create_info(extent: vk::Extent2D) -> vk::ImageCreateInfo<'static> {
    vk::ImageCreateInfo::default()
        .image_type(vk::ImageType::TYPE_2D)
        .format(DEPTH_FORMAT)
        .extent(vk::Extent3D {
            width: extent.width,
            height: extent.height,
            depth: 1,
        })
        .mip_levels(1)
        .array_layers(1)
        .samples(vk::SampleCountFlags::TYPE_1)
        .tiling(vk::ImageTiling::OPTIMAL)
        .usage(vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT)
        .sharing_mode(vk::SharingMode::EXCLUSIVE)
        .initial_layout(vk::ImageLayout::UNDEFINED)
}

/// Depth-aspect view of the depth image
pub fn depth_view_create_info(image: vk::Image) -> vk::ImageViewCreateInfo<'static> {
    vk::ImageViewCreateInfo::default()
        .image(image)
        .view_type(vk::ImageViewType::TYPE_2D)
        .format(DEPTH_FORMAT)
        .components(vk::ComponentMapping::default())
        .subresource_range(vk::ImageSubresourceRange {
            aspect_mask: vk::ImageAspectFlags::DEPTH,
            base_mip_level: 0,
            level_count: 1,
            base_array_layer: 0,
            layer_count: 1,
        })
}

/// Create, back, transition and view the depth image
pub(crate) fn create_depth_resources(
    device: &ash::Device,
    memory_properties: &vk::PhysicalDeviceMemoryProperties,
    queue: vk::Queue,
    command_buffer: vk::CommandBuffer,
    fence: vk::Fence,
    extent: vk::Extent2D,
) -> Result<DepthResources> {
    unsafe {
        let image = Utility::check_vulkan_result(
            device.create_image(&depth_image_create_info(extent), None),
            "Failed to create depth image",
        )?;

        let requirements = device.get_image_memory_requirements(image);
        let memory_type_index = find_memory_type_index(
            requirements.memory_type_bits,
            memory_properties,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        )?;

        let allocate_info = vk::MemoryAllocateInfo::default()
            .allocation_size(requirements.size)
            .memory_type_index(memory_type_index);
        let memory = Utility::check_vulkan_result(
            device.allocate_memory(&allocate_info, None),
            "Failed to allocate depth image memory",
        )?;
        Utility::check_vulkan_result(
            device.bind_image_memory(image, memory, 0),
            "Failed to bind depth image memory",
        )?;

        let submission = SetupSubmission::begin(device, command_buffer, fence)?;
        submission.transition_from_undefined(
            image,
            vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
            vk::ImageAspectFlags::DEPTH,
        );
        submission.submit_and_wait(queue, None)?;

        let view = Utility::check_vulkan_result(
            device.create_image_view(&depth_view_create_info(image), None),
            "Failed to create depth image view",
        )?;

        lv_debug!(
            "lv::vulkan",
            "Depth buffer {}x{} in memory type {}",
            extent.width,
            extent.height,
            memory_type_index
        );
        Ok(DepthResources { image, memory, view })
    }
}

#[cfg(test)]
#[path = "vulkan_depth_tests.rs"]
mod tests;
