/// Selection logic for the bootstrap
///
/// Everything here is a pure function of enumerated data, so it can be
/// checked without a device. Every choice is first-fit: the first candidate
/// that satisfies the predicate wins, in enumeration order.

use ash::vk;
use learning_vulkan::lv::Result;

use crate::utility::Utility;

/// Depth attachment format
pub const DEPTH_FORMAT: vk::Format = vk::Format::D16_UNORM;

/// Color format used when the surface has no preference
pub const FALLBACK_COLOR_FORMAT: vk::Format = vk::Format::R8G8B8A8_UNORM;

/// Clamp the desired swapchain image count into `[min, max]`.
/// A `max` of 0 means the surface sets no upper bound.
pub fn resolve_image_count(desired: u32, min: u32, max: u32) -> u32 {
    let count = desired.max(min);
    if max == 0 {
        count
    } else {
        count.min(max)
    }
}

/// Swapchain extent: the caller's size when the surface reports the
/// "any" sentinel on both axes, the surface's own extent otherwise.
pub fn resolve_extent(current: vk::Extent2D, width: u32, height: u32) -> vk::Extent2D {
    if current.width == u32::MAX && current.height == u32::MAX {
        vk::Extent2D { width, height }
    } else {
        current
    }
}

/// Identity if supported, else whatever the surface currently uses
pub fn choose_pre_transform(
    capabilities: &vk::SurfaceCapabilitiesKHR,
) -> vk::SurfaceTransformFlagsKHR {
    if capabilities
        .supported_transforms
        .contains(vk::SurfaceTransformFlagsKHR::IDENTITY)
    {
        vk::SurfaceTransformFlagsKHR::IDENTITY
    } else {
        capabilities.current_transform
    }
}

/// Mailbox wherever it appears in the list, FIFO otherwise
pub fn choose_present_mode(modes: &[vk::PresentModeKHR]) -> vk::PresentModeKHR {
    if modes.contains(&vk::PresentModeKHR::MAILBOX) {
        vk::PresentModeKHR::MAILBOX
    } else {
        vk::PresentModeKHR::FIFO
    }
}

/// First reported format/color-space pair, or 8-bit RGBA UNORM when the
/// surface reports no preference (a single `UNDEFINED` entry).
pub fn choose_surface_format(formats: &[vk::SurfaceFormatKHR]) -> Result<vk::SurfaceFormatKHR> {
    match formats {
        [] => Err(Utility::capability_not_found("Surface reports no supported formats")),
        [only] if only.format == vk::Format::UNDEFINED => Ok(vk::SurfaceFormatKHR {
            format: FALLBACK_COLOR_FORMAT,
            color_space: only.color_space,
        }),
        [first, ..] => Ok(*first),
    }
}

/// What one queue family can do, as far as device selection cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamilyCandidate {
    pub flags: vk::QueueFlags,
    pub supports_present: bool,
}

/// Index of the first family supporting both graphics and presentation
pub fn find_graphics_present_family(families: &[QueueFamilyCandidate]) -> Option<u32> {
    families
        .iter()
        .position(|family| family.supports_present && family.flags.contains(vk::QueueFlags::GRAPHICS))
        .map(|index| index as u32)
}

/// First device owning a graphics+present family, with that family's index.
///
/// `families_of` is only called until a match is found.
pub fn select_device<D, I, F>(devices: I, mut families_of: F) -> Result<(D, u32)>
where
    I: IntoIterator<Item = D>,
    F: FnMut(&D) -> Result<Vec<QueueFamilyCandidate>>,
{
    for device in devices {
        let families = families_of(&device)?;
        if let Some(index) = find_graphics_present_family(&families) {
            return Ok((device, index));
        }
    }
    Err(Utility::capability_not_found(
        "No physical device has a queue family supporting both graphics and presentation",
    ))
}

/// Smallest memory type index whose bit is set in `type_bits` and whose
/// property flags include all of `required`.
pub fn find_memory_type_index(
    type_bits: u32,
    memory_properties: &vk::PhysicalDeviceMemoryProperties,
    required: vk::MemoryPropertyFlags,
) -> Result<u32> {
    (0..vk::MAX_MEMORY_TYPES)
        .find(|&i| {
            type_bits & (1u32 << i) != 0
                && memory_properties.memory_types[i].property_flags.contains(required)
        })
        .map(|i| i as u32)
        .ok_or_else(|| {
            Utility::capability_not_found(format!(
                "No memory type in mask {:#034b} has flags {:?}",
                type_bits, required
            ))
        })
}

/// Resolved swapchain parameters
#[derive(Debug, Clone, Copy)]
pub struct SwapchainPlan {
    pub image_count: u32,
    pub surface_format: vk::SurfaceFormatKHR,
    pub extent: vk::Extent2D,
    pub pre_transform: vk::SurfaceTransformFlagsKHR,
    pub present_mode: vk::PresentModeKHR,
}

impl SwapchainPlan {
    /// Resolve every swapchain parameter from what the surface reports
    pub fn resolve(
        desired_image_count: u32,
        capabilities: &vk::SurfaceCapabilitiesKHR,
        formats: &[vk::SurfaceFormatKHR],
        present_modes: &[vk::PresentModeKHR],
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Ok(Self {
            image_count: resolve_image_count(
                desired_image_count,
                capabilities.min_image_count,
                capabilities.max_image_count,
            ),
            surface_format: choose_surface_format(formats)?,
            extent: resolve_extent(capabilities.current_extent, width, height),
            pre_transform: choose_pre_transform(capabilities),
            present_mode: choose_present_mode(present_modes),
        })
    }

    /// Exclusive, color-attachment, clipped swapchain for `surface`
    pub fn create_info(&self, surface: vk::SurfaceKHR) -> vk::SwapchainCreateInfoKHR<'static> {
        vk::SwapchainCreateInfoKHR::default()
            .surface(surface)
            .min_image_count(self.image_count)
            .image_format(self.surface_format.format)
            .image_color_space(self.surface_format.color_space)
            .image_extent(self.extent)
            .image_array_layers(1)
            .image_usage(vk::ImageUsageFlags::COLOR_ATTACHMENT)
            .image_sharing_mode(vk::SharingMode::EXCLUSIVE)
            .pre_transform(self.pre_transform)
            .composite_alpha(vk::CompositeAlphaFlagsKHR::OPAQUE)
            .present_mode(self.present_mode)
            .clipped(true)
    }
}

#[cfg(test)]
#[path = "vulkan_selection_tests.rs"]
mod tests;
