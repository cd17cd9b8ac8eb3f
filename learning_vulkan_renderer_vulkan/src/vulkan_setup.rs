/// One-shot setup submissions and layout-transition barriers
///
/// `SetupSubmission` is the "record, submit, wait, reset" protocol used for
/// every transition during initialization. The command buffer and fence are
/// reset when the value is dropped, so they are clean for the next use on
/// every exit path.

use ash::vk;
use learning_vulkan::lv::Result;
use learning_vulkan::lv_warn;

use crate::utility::Utility;

/// Access mask the new layout's first user needs
pub fn transition_dst_access(new_layout: vk::ImageLayout) -> vk::AccessFlags {
    match new_layout {
        vk::ImageLayout::PRESENT_SRC_KHR => vk::AccessFlags::MEMORY_READ,
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL => vk::AccessFlags::COLOR_ATTACHMENT_WRITE,
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL => {
            vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_READ
                | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE
        }
        _ => vk::AccessFlags::empty(),
    }
}

/// Pipeline stages bracketing a transition out of `UNDEFINED`
pub fn transition_stages(new_layout: vk::ImageLayout) -> (vk::PipelineStageFlags, vk::PipelineStageFlags) {
    let dst = match new_layout {
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL => {
            vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS
        }
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL => {
            vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
        }
        _ => vk::PipelineStageFlags::BOTTOM_OF_PIPE,
    };
    (vk::PipelineStageFlags::TOP_OF_PIPE, dst)
}

/// Barrier moving one mip/layer of `image` between layouts
pub fn layout_transition_barrier(
    image: vk::Image,
    old_layout: vk::ImageLayout,
    new_layout: vk::ImageLayout,
    aspect_mask: vk::ImageAspectFlags,
) -> vk::ImageMemoryBarrier<'static> {
    vk::ImageMemoryBarrier::default()
        .src_access_mask(vk::AccessFlags::empty())
        .dst_access_mask(transition_dst_access(new_layout))
        .old_layout(old_layout)
        .new_layout(new_layout)
        .src_queue_family_index(vk::QUEUE_FAMILY_IGNORED)
        .dst_queue_family_index(vk::QUEUE_FAMILY_IGNORED)
        .image(image)
        .subresource_range(vk::ImageSubresourceRange {
            aspect_mask,
            base_mip_level: 0,
            level_count: 1,
            base_array_layer: 0,
            layer_count: 1,
        })
}

/// A recording of the setup command buffer, guarded by the setup fence
pub(crate) struct SetupSubmission<'a> {
    device: &'a ash::Device,
    command_buffer: vk::CommandBuffer,
    fence: vk::Fence,
}

impl<'a> SetupSubmission<'a> {
    /// Begin a one-time-submit recording
    pub fn begin(
        device: &'a ash::Device,
        command_buffer: vk::CommandBuffer,
        fence: vk::Fence,
    ) -> Result<Self> {
        let begin_info =
            vk::CommandBufferBeginInfo::default().flags(vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT);
        Utility::check_vulkan_result(
            unsafe { device.begin_command_buffer(command_buffer, &begin_info) },
            "Failed to begin setup command buffer",
        )?;
        Ok(Self {
            device,
            command_buffer,
            fence,
        })
    }

    /// Record an `UNDEFINED` -> `new_layout` transition of `image`
    pub fn transition_from_undefined(
        &self,
        image: vk::Image,
        new_layout: vk::ImageLayout,
        aspect_mask: vk::ImageAspectFlags,
    ) {
        let barrier =
            layout_transition_barrier(image, vk::ImageLayout::UNDEFINED, new_layout, aspect_mask);
        let (src_stage, dst_stage) = transition_stages(new_layout);
        unsafe {
            self.device.cmd_pipeline_barrier(
                self.command_buffer,
                src_stage,
                dst_stage,
                vk::DependencyFlags::empty(),
                &[],
                &[],
                &[barrier],
            );
        }
    }

    /// End recording, submit to `queue` (optionally waiting on `wait_semaphore`)
    /// and block on the fence with no timeout.
    pub fn submit_and_wait(self, queue: vk::Queue, wait_semaphore: Option<vk::Semaphore>) -> Result<()> {
        unsafe {
            Utility::check_vulkan_result(
                self.device.end_command_buffer(self.command_buffer),
                "Failed to end setup command buffer",
            )?;

            let wait_semaphores: Vec<vk::Semaphore> = wait_semaphore.into_iter().collect();
            let wait_stages =
                vec![vk::PipelineStageFlags::ALL_COMMANDS; wait_semaphores.len()];
            let command_buffers = [self.command_buffer];

            let submit_info = vk::SubmitInfo::default()
                .wait_semaphores(&wait_semaphores)
                .wait_dst_stage_mask(&wait_stages)
                .command_buffers(&command_buffers);

            Utility::check_vulkan_result(
                self.device.queue_submit(queue, &[submit_info], self.fence),
                "Failed to submit setup command buffer",
            )?;

            Utility::check_vulkan_result(
                self.device.wait_for_fences(&[self.fence], true, u64::MAX),
                "Failed to wait for setup fence",
            )
        }
    }
}

impl Drop for SetupSubmission<'_> {
    fn drop(&mut self) {
        unsafe {
            if let Err(e) = self
                .device
                .reset_command_buffer(self.command_buffer, vk::CommandBufferResetFlags::empty())
            {
                lv_warn!("lv::vulkan", "Failed to reset setup command buffer: {:?}", e);
            }
            if let Err(e) = self.device.reset_fences(&[self.fence]) {
                lv_warn!("lv::vulkan", "Failed to reset setup fence: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "vulkan_setup_tests.rs"]
mod tests;
