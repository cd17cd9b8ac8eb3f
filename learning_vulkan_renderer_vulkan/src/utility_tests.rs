//! Unit tests for utility.rs
//!
//! No GPU required: results are built by hand.

use crate::utility::Utility;
use ash::vk;
use learning_vulkan::lv::Error;

#[test]
fn test_check_passes_success_value_through() {
    let value = Utility::check_vulkan_result(Ok(7u32), "unused").unwrap();
    assert_eq!(value, 7);
}

#[test]
fn test_check_turns_failure_into_resource_creation_failure() {
    let result: ash::prelude::VkResult<()> = Err(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY);
    let err = Utility::check_vulkan_result(result, "Failed to allocate depth image memory")
        .unwrap_err();

    match err {
        Error::ResourceCreationFailure(msg) => {
            assert!(msg.starts_with("Failed to allocate depth image memory"));
            assert!(msg.contains("ERROR_OUT_OF_DEVICE_MEMORY"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_capability_not_found_keeps_message() {
    let err = Utility::capability_not_found("No suitable memory type");
    assert_eq!(err, Error::CapabilityNotFound("No suitable memory type".to_string()));
}
