/// Utility - result checks shared by every native call

use ash::prelude::VkResult;
use learning_vulkan::lv::{Error, Result};
use learning_vulkan::lv_error;

/// Namespace for the native result check. Uninhabited: never constructed.
pub enum Utility {}

impl Utility {
    /// Pass a successful value through, or log `message` with the returned
    /// code and turn it into `Error::ResourceCreationFailure`.
    pub fn check_vulkan_result<T>(result: VkResult<T>, message: &str) -> Result<T> {
        result.map_err(|code| {
            lv_error!("lv::vulkan", "{}: {:?}", message, code);
            Error::ResourceCreationFailure(format!("{}: {:?}", message, code))
        })
    }

    /// Log `message` and build the matching `Error::CapabilityNotFound`.
    pub fn capability_not_found(message: impl Into<String>) -> Error {
        let message = message.into();
        lv_error!("lv::vulkan", "{}", message);
        Error::CapabilityNotFound(message)
    }
}

#[cfg(test)]
#[path = "utility_tests.rs"]
mod tests;
