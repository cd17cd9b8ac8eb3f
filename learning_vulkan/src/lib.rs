/*!
# LearningVulkan

Core types for the LearningVulkan triangle renderer.

This crate holds everything that does not depend on a graphics API: the error
type, the logging system, the renderer configuration, the vertex layout and
the `Renderer` trait that the window/event-loop side drives. The Vulkan
backend lives in `learning_vulkan_renderer_vulkan`.

## Architecture

- **Renderer**: per-frame interface called on every repaint
- **Config**: instance metadata and validation/debug-report switches
- **Vertex**: position-only vertex, plus the hardcoded triangle
- **Log**: replaceable process-wide logger used by the `lv_*!` macros
*/

// Internal modules
mod config;
mod error;
pub mod log;
mod renderer;
mod vertex;

// Main lv namespace module
pub mod lv {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{Config, ApiVersion, KHRONOS_VALIDATION_LAYER};

    // Renderer trait
    pub use crate::renderer::Renderer;

    // Vertex data
    pub use crate::vertex::{Vertex, TRIANGLE};

    // Logging facade (types only, macros are exported at the crate root)
    pub use crate::log::Log;

    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}
