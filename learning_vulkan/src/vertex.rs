//! Vertex layout and the hardcoded triangle

use bytemuck::{Pod, Zeroable};

/// Position-only vertex (three 32-bit floats)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The one triangle this renderer uploads, centered at the origin
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new(-1.0, -1.0, 0.0),
    Vertex::new(1.0, -1.0, 0.0),
    Vertex::new(0.0, 1.0, 0.0),
];

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
