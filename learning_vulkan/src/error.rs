//! Error types for LearningVulkan
//!
//! Bootstrap failures come in two kinds: a native call that did not return
//! success, and an enumeration that found nothing usable.

use std::fmt;

/// Result type for LearningVulkan operations
pub type Result<T> = std::result::Result<T, Error>;

/// LearningVulkan errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A native graphics call returned a non-success code
    ResourceCreationFailure(String),

    /// No layer, extension, device, queue family, format or memory type qualified
    CapabilityNotFound(String),
}

impl Error {
    /// Human-readable message carried by the error
    pub fn message(&self) -> &str {
        match self {
            Error::ResourceCreationFailure(msg) | Error::CapabilityNotFound(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceCreationFailure(msg) => write!(f, "Resource creation failed: {}", msg),
            Error::CapabilityNotFound(msg) => write!(f, "Capability not found: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
