//! Core types for wire4d
//!
//! - [`SpatialObject`] - Points with a topology (cloud, wireframe, solid) and a style
//! - [`generators`] - Procedural shapes: cube, toroid, sphere, Möbius strip, tesseract...
//! - [`ShapeTemplate`] - Serializable shape description
//! - [`Scene`] - Ordered list of 3D and 4D objects to draw
//! - [`SceneFile`] - Loadable/saveable scene description

mod error;
mod spatial;
pub mod generators;
mod shapes;
mod scene;

pub use error::GeometryError;
pub use spatial::{Color, Style, Topology, SpatialObject};
pub use shapes::{ShapeTemplate, ObjectTemplate, SHAPE_CATALOG};
pub use scene::{Scene, SceneObject, SceneFile, SceneLoadError, SceneSaveError};

// Re-export commonly used types from wire4d_math for convenience
pub use wire4d_math::{Vector, Vec2, Vec3, Vec4};
