//! Unit tests for vulkan_vertex_buffer.rs create-info builder

use crate::vulkan_vertex_buffer::*;
use ash::vk;
use learning_vulkan::lv::TRIANGLE;

#[test]
fn test_vertex_buffer_sized_for_three_vertices() {
    let info = vertex_buffer_create_info(TRIANGLE.len());
    assert_eq!(info.size, 36);
}

#[test]
fn test_vertex_buffer_usage_and_sharing() {
    let info = vertex_buffer_create_info(3);
    assert_eq!(info.usage, vk::BufferUsageFlags::VERTEX_BUFFER);
    assert_eq!(info.sharing_mode, vk::SharingMode::EXCLUSIVE);
}
