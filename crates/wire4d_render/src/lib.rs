//! Camera and canvas rendering for wire4d
//!
//! Cameras project 3D and 4D objects onto a flat canvas; there is no depth
//! buffer and objects draw in order.
//!
//! ## Key Components
//!
//! - [`camera::Camera`] - View rotation, cropping and projection, with
//!   [`OrthographicCamera`], [`PerspectiveCamera`] and [`Perspective4DCamera`]
//! - [`projection`] - Orthographic, perspective and 4D→3D projection functions
//! - [`canvas::Canvas`] - Sink for projected points, lines and polygons
//! - [`frame::FrameCanvas`] - Tessellates a frame into GPU triangles
//! - [`pipeline::CanvasPipeline`] - Draws those triangles
//! - [`context::RenderContext`] - WGPU device, queue, and surface management

pub mod camera;
pub mod canvas;
pub mod context;
pub mod frame;
pub mod pipeline;
pub mod projection;

pub use camera::{
    Camera, CameraBody, DrawFlags, ViewSettings, OrthographicCamera, PerspectiveCamera,
    Perspective4DCamera,
};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, Stroke};
pub use frame::FrameCanvas;
