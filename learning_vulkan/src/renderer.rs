//! Renderer trait - the interface the window/event-loop side drives

use crate::error::Result;

/// A ready renderer
///
/// Backends hand out values of this trait only once initialization has fully
/// succeeded; dropping the value tears the backend down.
pub trait Renderer {
    /// Present one frame. Called by the event loop on every repaint.
    fn render(&mut self) -> Result<()>;

    /// Current drawable size in pixels (may differ from the requested size)
    fn extent(&self) -> (u32, u32);
}
