/// Physical device selection and logical device creation

use ash::vk;
use learning_vulkan::lv::Result;
use learning_vulkan::lv_info;

use crate::utility::Utility;
use crate::vulkan_selection::{select_device, QueueFamilyCandidate};

/// The chosen physical device and what was captured about it
pub struct SelectedDevice {
    pub physical_device: vk::PhysicalDevice,
    pub queue_family_index: u32,
    pub properties: vk::PhysicalDeviceProperties,
    pub memory_properties: vk::PhysicalDeviceMemoryProperties,
}

impl SelectedDevice {
    pub fn name(&self) -> String {
        self.properties
            .device_name_as_c_str()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// First device with a family supporting graphics and presentation on `surface`
pub(crate) fn select_physical_device(
    instance: &ash::Instance,
    surface_loader: &ash::khr::surface::Instance,
    surface: vk::SurfaceKHR,
) -> Result<SelectedDevice> {
    let physical_devices = Utility::check_vulkan_result(
        unsafe { instance.enumerate_physical_devices() },
        "Failed to enumerate physical devices",
    )?;

    let (physical_device, queue_family_index) = select_device(physical_devices, |&device| {
        let families = unsafe { instance.get_physical_device_queue_family_properties(device) };
        families
            .iter()
            .enumerate()
            .map(|(index, family)| -> Result<QueueFamilyCandidate> {
                let supports_present = Utility::check_vulkan_result(
                    unsafe {
                        surface_loader.get_physical_device_surface_support(
                            device,
                            index as u32,
                            surface,
                        )
                    },
                    "Failed to query surface support",
                )?;
                Ok(QueueFamilyCandidate {
                    flags: family.queue_flags,
                    supports_present,
                })
            })
            .collect()
    })?;

    let selected = unsafe {
        SelectedDevice {
            physical_device,
            queue_family_index,
            properties: instance.get_physical_device_properties(physical_device),
            memory_properties: instance.get_physical_device_memory_properties(physical_device),
        }
    };
    lv_info!(
        "lv::vulkan",
        "Selected device '{}' (queue family {})",
        selected.name(),
        queue_family_index
    );
    Ok(selected)
}

/// One max-priority queue on the selected family, swapchain extension and
/// `shaderClipDistance` enabled
pub(crate) fn create_logical_device(
    instance: &ash::Instance,
    selected: &SelectedDevice,
) -> Result<ash::Device> {
    let queue_priorities = [1.0];
    let queue_create_infos = [vk::DeviceQueueCreateInfo::default()
        .queue_family_index(selected.queue_family_index)
        .queue_priorities(&queue_priorities)];

    let extension_names = [ash::khr::swapchain::NAME.as_ptr()];
    let features = vk::PhysicalDeviceFeatures::default().shader_clip_distance(true);

    let create_info = vk::DeviceCreateInfo::default()
        .queue_create_infos(&queue_create_infos)
        .enabled_extension_names(&extension_names)
        .enabled_features(&features);

    Utility::check_vulkan_result(
        unsafe { instance.create_device(selected.physical_device, &create_info, None) },
        "Failed to create logical device",
    )
}
