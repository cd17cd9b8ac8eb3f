/// Vertex buffer - the static triangle in host-visible memory

use ash::vk;
use learning_vulkan::lv::{Result, Vertex};
use learning_vulkan::lv_debug;

use crate::utility::Utility;
use crate::vulkan_selection::find_memory_type_index;

/// Vertex buffer and its memory
#[derive(Debug, Clone, Copy)]
pub struct VertexBuffer {
    pub buffer: vk::Buffer,
    pub memory: vk::DeviceMemory,
    pub vertex_count: u32,
}

/// Exclusive vertex-buffer-usage buffer sized for `vertex_count` vertices
pub fn vertex_buffer_create_info(vertex_count: usize) -> vk::BufferCreateInfo<'static> {
    vk::BufferCreateInfo::default()
        .size((vertex_count * std::mem::size_of::<Vertex>()) as vk::DeviceSize)
        .usage(vk::BufferUsageFlags::VERTEX_BUFFER)
        .sharing_mode(vk::SharingMode::EXCLUSIVE)
}

/// Create the buffer, then allocate, map, fill, unmap and bind its memory
pub(crate) fn create_vertex_buffer(
    device: &ash::Device,
    memory_properties: &vk::PhysicalDeviceMemoryProperties,
    vertices: &[Vertex],
) -> Result<VertexBuffer> {
    unsafe {
        let buffer = Utility::check_vulkan_result(
            device.create_buffer(&vertex_buffer_create_info(vertices.len()), None),
            "Failed to create vertex buffer",
        )?;

        let requirements = device.get_buffer_memory_requirements(buffer);
        let memory_type_index = find_memory_type_index(
            requirements.memory_type_bits,
            memory_properties,
            vk::MemoryPropertyFlags::HOST_VISIBLE,
        )?;
        let coherent = memory_properties.memory_types[memory_type_index as usize]
            .property_flags
            .contains(vk::MemoryPropertyFlags::HOST_COHERENT);

        let allocate_info = vk::MemoryAllocateInfo::default()
            .allocation_size(requirements.size)
            .memory_type_index(memory_type_index);
        let memory = Utility::check_vulkan_result(
            device.allocate_memory(&allocate_info, None),
            "Failed to allocate vertex buffer memory",
        )?;

        let mapped = Utility::check_vulkan_result(
            device.map_memory(memory, 0, vk::WHOLE_SIZE, vk::MemoryMapFlags::empty()),
            "Failed to map vertex buffer memory",
        )?;
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), mapped.cast::<u8>(), bytes.len());

        if !coherent {
            let range = vk::MappedMemoryRange::default()
                .memory(memory)
                .offset(0)
                .size(vk::WHOLE_SIZE);
            Utility::check_vulkan_result(
                device.flush_mapped_memory_ranges(&[range]),
                "Failed to flush vertex buffer memory",
            )?;
        }
        device.unmap_memory(memory);

        Utility::check_vulkan_result(
            device.bind_buffer_memory(buffer, memory, 0),
            "Failed to bind vertex buffer memory",
        )?;

        lv_debug!(
            "lv::vulkan",
            "Vertex buffer: {} vertices in memory type {} (coherent: {})",
            vertices.len(),
            memory_type_index,
            coherent
        );
        Ok(VertexBuffer {
            buffer,
            memory,
            vertex_count: vertices.len() as u32,
        })
    }
}

#[cfg(test)]
#[path = "vulkan_vertex_buffer_tests.rs"]
mod tests;
