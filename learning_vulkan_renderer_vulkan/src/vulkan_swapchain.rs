/// Swapchain - creation, initial image transitions and image views

use ash::vk;
use learning_vulkan::lv::Result;
use learning_vulkan::{lv_debug, lv_info, lv_warn};

use crate::utility::Utility;
use crate::vulkan_selection::SwapchainPlan;
use crate::vulkan_setup::SetupSubmission;

/// Query the surface, resolve the plan and create the swapchain
pub(crate) fn create_swapchain(
    surface_loader: &ash::khr::surface::Instance,
    swapchain_loader: &ash::khr::swapchain::Device,
    physical_device: vk::PhysicalDevice,
    surface: vk::SurfaceKHR,
    desired_image_count: u32,
    width: u32,
    height: u32,
) -> Result<(vk::SwapchainKHR, SwapchainPlan)> {
    unsafe {
        let formats = Utility::check_vulkan_result(
            surface_loader.get_physical_device_surface_formats(physical_device, surface),
            "Failed to query surface formats",
        )?;
        let capabilities = Utility::check_vulkan_result(
            surface_loader.get_physical_device_surface_capabilities(physical_device, surface),
            "Failed to query surface capabilities",
        )?;
        let present_modes = Utility::check_vulkan_result(
            surface_loader.get_physical_device_surface_present_modes(physical_device, surface),
            "Failed to query surface present modes",
        )?;

        let plan = SwapchainPlan::resolve(
            desired_image_count,
            &capabilities,
            &formats,
            &present_modes,
            width,
            height,
        )?;

        let swapchain = Utility::check_vulkan_result(
            swapchain_loader.create_swapchain(&plan.create_info(surface), None),
            "Failed to create swapchain",
        )?;

        lv_info!(
            "lv::vulkan",
            "Swapchain created: {}x{}, {} images requested, {:?} / {:?}, {:?}",
            plan.extent.width,
            plan.extent.height,
            plan.image_count,
            plan.surface_format.format,
            plan.surface_format.color_space,
            plan.present_mode
        );
        Ok((swapchain, plan))
    }
}

/// Move every swapchain image from `UNDEFINED` to `PRESENT_SRC_KHR`.
///
/// Images are reached by cycling acquire/submit/present: each acquired image
/// that has not been transitioned gets a barrier, every acquired image is
/// submitted (to consume the acquire semaphore) and presented straight back.
pub(crate) fn transition_swapchain_images(
    device: &ash::Device,
    swapchain_loader: &ash::khr::swapchain::Device,
    queue: vk::Queue,
    swapchain: vk::SwapchainKHR,
    images: &[vk::Image],
    command_buffer: vk::CommandBuffer,
    fence: vk::Fence,
) -> Result<()> {
    let mut transitioned = vec![false; images.len()];
    let mut remaining = images.len();

    while remaining > 0 {
        unsafe {
            let semaphore = Utility::check_vulkan_result(
                device.create_semaphore(&vk::SemaphoreCreateInfo::default(), None),
                "Failed to create image-acquire semaphore",
            )?;

            let acquired = transition_acquired_image(
                device,
                swapchain_loader,
                queue,
                swapchain,
                images,
                &mut transitioned,
                semaphore,
                command_buffer,
                fence,
            );
            device.destroy_semaphore(semaphore, None);

            if acquired? {
                remaining -= 1;
            }
        }
    }

    lv_debug!("lv::vulkan", "Transitioned {} swapchain images to present layout", images.len());
    Ok(())
}

/// One acquire/submit/present round; `true` when a new image was transitioned
#[allow(clippy::too_many_arguments)]
fn transition_acquired_image(
    device: &ash::Device,
    swapchain_loader: &ash::khr::swapchain::Device,
    queue: vk::Queue,
    swapchain: vk::SwapchainKHR,
    images: &[vk::Image],
    transitioned: &mut [bool],
    semaphore: vk::Semaphore,
    command_buffer: vk::CommandBuffer,
    fence: vk::Fence,
) -> Result<bool> {
    unsafe {
        let (index, suboptimal) = Utility::check_vulkan_result(
            swapchain_loader.acquire_next_image(swapchain, u64::MAX, semaphore, vk::Fence::null()),
            "Failed to acquire swapchain image",
        )?;
        if suboptimal {
            lv_warn!("lv::vulkan", "Swapchain is suboptimal during setup");
        }

        let slot = index as usize;
        let newly_transitioned = !transitioned[slot];

        let submission = SetupSubmission::begin(device, command_buffer, fence)?;
        if newly_transitioned {
            submission.transition_from_undefined(
                images[slot],
                vk::ImageLayout::PRESENT_SRC_KHR,
                vk::ImageAspectFlags::COLOR,
            );
            transitioned[slot] = true;
        }
        submission.submit_and_wait(queue, Some(semaphore))?;

        present(swapchain_loader, queue, swapchain, index)?;
        Ok(newly_transitioned)
    }
}

/// Present `index` with no wait semaphore
pub(crate) fn present(
    swapchain_loader: &ash::khr::swapchain::Device,
    queue: vk::Queue,
    swapchain: vk::SwapchainKHR,
    index: u32,
) -> Result<()> {
    let swapchains = [swapchain];
    let image_indices = [index];
    let present_info = vk::PresentInfoKHR::default()
        .swapchains(&swapchains)
        .image_indices(&image_indices);

    let suboptimal = Utility::check_vulkan_result(
        unsafe { swapchain_loader.queue_present(queue, &present_info) },
        "Failed to present swapchain image",
    )?;
    if suboptimal {
        lv_warn!("lv::vulkan", "Swapchain is suboptimal for the surface");
    }
    Ok(())
}

/// 2D color view with identity swizzle over one mip level and layer
pub fn color_view_create_info(image: vk::Image, format: vk::Format) -> vk::ImageViewCreateInfo<'static> {
    vk::ImageViewCreateInfo::default()
        .image(image)
        .view_type(vk::ImageViewType::TYPE_2D)
        .format(format)
        .components(vk::ComponentMapping {
            r: vk::ComponentSwizzle::IDENTITY,
            g: vk::ComponentSwizzle::IDENTITY,
            b: vk::ComponentSwizzle::IDENTITY,
            a: vk::ComponentSwizzle::IDENTITY,
        })
        .subresource_range(vk::ImageSubresourceRange {
            aspect_mask: vk::ImageAspectFlags::COLOR,
            base_mip_level: 0,
            level_count: 1,
            base_array_layer: 0,
            layer_count: 1,
        })
}

/// One color view per swapchain image
pub(crate) fn create_image_views(
    device: &ash::Device,
    images: &[vk::Image],
    format: vk::Format,
) -> Result<Vec<vk::ImageView>> {
    images
        .iter()
        .map(|&image| {
            Utility::check_vulkan_result(
                unsafe { device.create_image_view(&color_view_create_info(image, format), None) },
                "Failed to create swapchain image view",
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "vulkan_swapchain_tests.rs"]
mod tests;
