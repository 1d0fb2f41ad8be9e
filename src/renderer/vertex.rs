//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [26.0 / 255.0, 26.0 / 255.0, 46.0 / 255.0, 1.0];
    pub const HEART: [f32; 4] = [1.0, 100.0 / 255.0, 150.0 / 255.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LABEL: [f32; 4] = [1.0, 1.0, 1.0, 150.0 / 255.0];
    /// Fallback when an avatar image is missing
    pub const AVATAR_ONE: [f32; 4] = [0.9, 0.25, 0.3, 1.0];
    pub const AVATAR_TWO: [f32; 4] = [0.3, 0.85, 0.4, 1.0];
}
