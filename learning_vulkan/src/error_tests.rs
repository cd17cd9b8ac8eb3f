//! Unit tests for error.rs
//!
//! Tests both Error variants and their Display, Debug, Clone and std::error::Error impls.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_resource_creation_failure_display() {
    let err = Error::ResourceCreationFailure("Failed to create swapchain".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Resource creation failed"));
    assert!(display.contains("Failed to create swapchain"));
}

#[test]
fn test_capability_not_found_display() {
    let err = Error::CapabilityNotFound("No present-capable graphics queue".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Capability not found: No present-capable graphics queue");
}

#[test]
fn test_error_message_accessor() {
    assert_eq!(Error::ResourceCreationFailure("a".to_string()).message(), "a");
    assert_eq!(Error::CapabilityNotFound("b".to_string()).message(), "b");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::CapabilityNotFound("layer".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::ResourceCreationFailure("x".to_string()));
    assert!(debug1.contains("ResourceCreationFailure"));

    let debug2 = format!("{:?}", Error::CapabilityNotFound("y".to_string()));
    assert!(debug2.contains("CapabilityNotFound"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::ResourceCreationFailure("device".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::CapabilityNotFound("device".to_string()));
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

#[test]
fn test_result_propagation() {
    fn fails() -> Result<u32> {
        Err(Error::CapabilityNotFound("memory type".to_string()))
    }

    fn propagates() -> Result<u32> {
        let value = fails()?;
        Ok(value + 1)
    }

    assert!(matches!(propagates(), Err(Error::CapabilityNotFound(_))));
}
