//! Rendering pipeline components
//!
//! The canvas pipeline draws the camera output as alpha-blended 2D
//! triangles.

pub mod types;
pub mod canvas_pipeline;

// Re-export types
pub use types::{Vertex2D, CanvasUniforms};

// Re-export pipelines
pub use canvas_pipeline::CanvasPipeline;
