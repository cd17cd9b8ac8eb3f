//! Unit tests for config.rs

use crate::config::{ApiVersion, Config, KHRONOS_VALIDATION_LAYER};

#[test]
fn test_default_config_metadata() {
    let config = Config::default();
    assert_eq!(config.app_name, "Learning Vulkan");
    assert_eq!(config.engine_name, "Unknown");
    assert_eq!(config.engine_version, 1);
    assert_eq!(config.api_version, ApiVersion::new(1, 1, 82));
}

#[test]
fn test_default_config_double_buffers() {
    assert_eq!(Config::default().desired_image_count, 2);
}

#[test]
fn test_default_config_debug_switches() {
    let config = Config::default();
    assert_eq!(config.enable_validation, cfg!(debug_assertions));
    assert!(config.enable_debug_report);
    assert_eq!(config.validation_layer, KHRONOS_VALIDATION_LAYER);
}

#[test]
fn test_config_override() {
    let config = Config {
        enable_validation: false,
        desired_image_count: 3,
        ..Config::default()
    };
    assert!(!config.enable_validation);
    assert_eq!(config.desired_image_count, 3);
    assert_eq!(config.app_name, "Learning Vulkan");
}
