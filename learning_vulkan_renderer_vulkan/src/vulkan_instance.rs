/// Instance creation: application metadata, layer and extension checks

use ash::vk;
use learning_vulkan::lv::{ApiVersion, Config, Error, Result};
use learning_vulkan::{lv_debug, lv_info};
use raw_window_handle::RawDisplayHandle;
use std::ffi::{CStr, CString};

use crate::utility::Utility;
use crate::vulkan_extensions::{missing_names, required_instance_extensions};

fn api_version(version: ApiVersion) -> u32 {
    vk::make_api_version(0, version.major, version.minor, version.patch)
}

fn c_string(value: &str, what: &str) -> Result<CString> {
    CString::new(value).map_err(|_| {
        Error::ResourceCreationFailure(format!("{} contains an interior NUL byte: {:?}", what, value))
    })
}

fn join_names(names: &[&CStr]) -> String {
    names
        .iter()
        .map(|name| name.to_string_lossy())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fail unless every layer in `required` is supported
fn require_layers(entry: &ash::Entry, required: &[&CStr]) -> Result<()> {
    let properties = Utility::check_vulkan_result(
        unsafe { entry.enumerate_instance_layer_properties() },
        "Failed to enumerate instance layers",
    )?;
    let available: Vec<&CStr> = properties
        .iter()
        .filter_map(|layer| layer.layer_name_as_c_str().ok())
        .collect();

    let missing = missing_names(&available, required);
    if !missing.is_empty() {
        return Err(Utility::capability_not_found(format!(
            "Required validation layer not supported: {}",
            join_names(&missing)
        )));
    }
    Ok(())
}

/// Fail unless every extension in `required` is supported
fn require_extensions(entry: &ash::Entry, required: &[&CStr]) -> Result<()> {
    let properties = Utility::check_vulkan_result(
        unsafe { entry.enumerate_instance_extension_properties(None) },
        "Failed to enumerate instance extensions",
    )?;
    let available: Vec<&CStr> = properties
        .iter()
        .filter_map(|extension| extension.extension_name_as_c_str().ok())
        .collect();

    let missing = missing_names(&available, required);
    if !missing.is_empty() {
        return Err(Utility::capability_not_found(format!(
            "Required instance extensions not supported: {}",
            join_names(&missing)
        )));
    }
    Ok(())
}

/// Create the instance with the surface, platform and debug-report extensions
pub(crate) fn create_instance(
    entry: &ash::Entry,
    config: &Config,
    display: RawDisplayHandle,
) -> Result<ash::Instance> {
    let app_name = c_string(&config.app_name, "Application name")?;
    let engine_name = c_string(&config.engine_name, "Engine name")?;

    let app_info = vk::ApplicationInfo::default()
        .application_name(&app_name)
        .application_version(api_version(config.app_version))
        .engine_name(&engine_name)
        .engine_version(config.engine_version)
        .api_version(api_version(config.api_version));

    let validation_layer = c_string(&config.validation_layer, "Validation layer name")?;
    let layers: Vec<&CStr> = if config.enable_validation {
        vec![validation_layer.as_c_str()]
    } else {
        Vec::new()
    };
    if !layers.is_empty() {
        require_layers(entry, &layers)?;
    }

    let extensions = required_instance_extensions(display, config.enable_debug_report)?;
    require_extensions(entry, &extensions)?;
    lv_debug!("lv::vulkan", "Instance extensions: {}", join_names(&extensions));

    let layer_ptrs: Vec<_> = layers.iter().map(|name| name.as_ptr()).collect();
    let extension_ptrs: Vec<_> = extensions.iter().map(|name| name.as_ptr()).collect();

    let create_info = vk::InstanceCreateInfo::default()
        .application_info(&app_info)
        .enabled_layer_names(&layer_ptrs)
        .enabled_extension_names(&extension_ptrs);

    let instance = Utility::check_vulkan_result(
        unsafe { entry.create_instance(&create_info, None) },
        "Failed to create instance",
    )?;
    lv_info!(
        "lv::vulkan",
        "Instance created (validation: {}, debug report: {})",
        config.enable_validation,
        config.enable_debug_report
    );
    Ok(instance)
}
