//! Vertex types for world-space draw lists

use bytemuck::{Pod, Zeroable};

/// World-space vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    /// Byte stride of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.15, 1.0];
    pub const TABLE: [f32; 4] = [0.2, 0.6, 0.2, 1.0];
    pub const BORDER: [f32; 4] = [0.25, 0.2, 0.15, 1.0];
    pub const LEFT_PADDLE: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    pub const RIGHT_PADDLE: [f32; 4] = [0.2, 0.2, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const COLLIDER_DEBUG: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
