//! GPU-compatible data types for the canvas pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A colored vertex in canvas space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Pixels from the viewport center, +y up
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the canvas pass
/// Layout: 16 bytes total (must match canvas.wgsl CanvasUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Viewport size in pixels
    pub screen_size: [f32; 2],
    /// Padding for 16-byte alignment
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for CanvasUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_canvas_uniforms_size() {
        assert_eq!(size_of::<CanvasUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
        assert_eq!(std::mem::align_of::<CanvasUniforms>(), 4);
    }
}
