//! Serializable shape templates
//!
//! ShapeTemplate stores the construction parameters of each generator so
//! scenes can be described in RON files. Shapes are always created in local
//! space; the owning [`ObjectTemplate`] positions them.

use std::f32::consts::PI;

use serde::{Serialize, Deserialize};
use wire4d_math::Vec4;

use crate::error::GeometryError;
use crate::generators;
use crate::scene::SceneObject;
use crate::spatial::Style;

/// Object selector entries in menu order
pub const SHAPE_CATALOG: [&str; 8] = [
    "Rot Toroid",
    "Moebius",
    "Function",
    "Cylinder",
    "Toroid",
    "Cube",
    "Sphere",
    "Tesseract",
];

/// Serializable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// Cube with vertices at ±half_size
    Cube { half_size: f32 },
    /// Saddle surface `y = x² - z²`
    Saddle { width: f32, depth: f32, resolution: usize },
    /// Capped or open cylinder along an axis
    Cylinder { axis: usize, radius: f32, segments: usize, length: f32, caps: bool },
    /// Torus
    Toroid { tube_radius: f32, ring_radius: f32, tube_segments: usize, ring_segments: usize },
    /// Sphere
    Sphere { radius: f32, parallels: usize, meridians: usize },
    /// Torus whose cross-section twists while revolving
    RotToroid {
        tube_radius: f32,
        ring_radius: f32,
        tube_segments: usize,
        ring_segments: usize,
        twist: f32,
    },
    /// Möbius strip
    Moebius { width: f32, radius: f32, segments: usize, twist: f32 },
    /// 4D hypercube wireframe
    Tesseract { size: f32 },
}

impl ShapeTemplate {
    /// Build the object described by this template
    ///
    /// Fails with [`GeometryError::InvalidAxis`] when a cylinder names an
    /// axis other than 0, 1 or 2.
    pub fn create(&self) -> Result<SceneObject, GeometryError> {
        let object = match *self {
            ShapeTemplate::Cube { half_size } => generators::cube(half_size).into(),
            ShapeTemplate::Saddle { width, depth, resolution } => {
                generators::function_plot(|x, z| x * x - z * z, width, depth, resolution, resolution)
                    .into()
            }
            ShapeTemplate::Cylinder { axis, radius, segments, length, caps } => {
                if axis > 2 {
                    return Err(GeometryError::InvalidAxis { axis });
                }
                generators::cylinder(axis, radius, segments, length, caps).into()
            }
            ShapeTemplate::Toroid { tube_radius, ring_radius, tube_segments, ring_segments } => {
                generators::toroid(tube_radius, ring_radius, tube_segments, ring_segments).into()
            }
            ShapeTemplate::Sphere { radius, parallels, meridians } => {
                generators::sphere(radius, parallels, meridians).into()
            }
            ShapeTemplate::RotToroid {
                tube_radius,
                ring_radius,
                tube_segments,
                ring_segments,
                twist,
            } => generators::rot_toroid(tube_radius, ring_radius, tube_segments, ring_segments, twist)
                .into(),
            ShapeTemplate::Moebius { width, radius, segments, twist } => {
                generators::moebius(width, radius, segments, twist).into()
            }
            ShapeTemplate::Tesseract { size } => generators::tesseract(size).into(),
        };
        Ok(object)
    }

    /// Whether this shape lives in 4D space
    pub fn is_hyper(&self) -> bool {
        matches!(self, ShapeTemplate::Tesseract { .. })
    }

    /// Object selector preset by name, see [`SHAPE_CATALOG`]
    pub fn preset(name: &str) -> Option<ShapeTemplate> {
        let template = match name {
            "Rot Toroid" => ShapeTemplate::RotToroid {
                tube_radius: 1.0,
                ring_radius: 3.0,
                tube_segments: 4,
                ring_segments: 64,
                twist: 3.0 * PI / 2.0,
            },
            "Moebius" => ShapeTemplate::Moebius { width: 1.0, radius: 3.0, segments: 64, twist: PI },
            "Function" => ShapeTemplate::Saddle { width: 2.0, depth: 2.0, resolution: 15 },
            "Cylinder" => ShapeTemplate::Cylinder {
                axis: 1,
                radius: 1.0,
                segments: 32,
                length: 3.0,
                caps: true,
            },
            "Toroid" => ShapeTemplate::Toroid {
                tube_radius: 1.0,
                ring_radius: 3.0,
                tube_segments: 16,
                ring_segments: 32,
            },
            "Cube" => ShapeTemplate::Cube { half_size: 1.0 },
            "Sphere" => ShapeTemplate::Sphere { radius: 1.0, parallels: 16, meridians: 32 },
            "Tesseract" => ShapeTemplate::Tesseract { size: 2.0 },
            _ => return None,
        };
        Some(template)
    }
}

/// A shape placed in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    pub shape: ShapeTemplate,
    /// Origin offset [x, y, z, u]; u is ignored for 3D shapes
    #[serde(default)]
    pub position: [f32; 4],
    /// Uniform scale applied to the points
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Style override
    #[serde(default)]
    pub style: Option<Style>,
}

fn default_scale() -> f32 {
    1.0
}

impl ObjectTemplate {
    /// Unnamed template at the origin
    pub fn new(shape: ShapeTemplate) -> Self {
        Self {
            name: None,
            shape,
            position: [0.0; 4],
            scale: 1.0,
            style: None,
        }
    }

    /// Builder: set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the origin offset
    pub fn with_position(mut self, position: [f32; 4]) -> Self {
        self.position = position;
        self
    }

    /// Create the scene object, scaled, styled and positioned
    pub fn to_object(&self) -> Result<SceneObject, GeometryError> {
        let offset = Vec4::new(self.position);
        let object = match self.shape.create()? {
            SceneObject::Spatial(mut obj) => {
                obj.scale(self.scale).move_by(offset.xyz());
                if let Some(style) = self.style {
                    obj.style = style;
                }
                SceneObject::Spatial(obj)
            }
            SceneObject::Hyper(mut obj) => {
                obj.scale(self.scale).move_by(offset);
                if let Some(style) = self.style {
                    obj.style = style;
                }
                SceneObject::Hyper(obj)
            }
        };
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire4d_math::Vec3;

    #[test]
    fn test_catalog_lookup() {
        for name in SHAPE_CATALOG {
            assert!(ShapeTemplate::preset(name).is_some(), "{} has no preset", name);
        }
        assert_eq!(ShapeTemplate::preset("Cube"), Some(ShapeTemplate::Cube { half_size: 1.0 }));
        assert_eq!(ShapeTemplate::preset("Dodecahedron"), None);
    }

    #[test]
    fn test_every_preset_is_valid() {
        for name in SHAPE_CATALOG {
            let template = ShapeTemplate::preset(name).unwrap();
            assert!(template.create().unwrap().validate().is_ok(), "{} has bad topology", name);
        }
    }

    #[test]
    fn test_dimension_of_created_shapes() {
        assert!(matches!(
            ShapeTemplate::Cube { half_size: 1.0 }.create(),
            Ok(SceneObject::Spatial(_))
        ));
        let tesseract = ShapeTemplate::Tesseract { size: 2.0 };
        assert!(tesseract.is_hyper());
        assert!(matches!(tesseract.create(), Ok(SceneObject::Hyper(_))));
    }

    #[test]
    fn test_cylinder_axis_out_of_range() {
        let cylinder = |axis| ShapeTemplate::Cylinder {
            axis,
            radius: 1.0,
            segments: 8,
            length: 2.0,
            caps: true,
        };
        assert!(cylinder(2).create().is_ok());
        assert_eq!(cylinder(3).create(), Err(GeometryError::InvalidAxis { axis: 3 }));
    }

    #[test]
    fn test_object_template_places_shape() {
        let template = ObjectTemplate::new(ShapeTemplate::Cube { half_size: 1.0 })
            .with_position([1.0, 2.0, 3.0, 9.0]);
        let template = ObjectTemplate { scale: 2.0, ..template };
        match template.to_object().unwrap() {
            SceneObject::Spatial(obj) => {
                assert_eq!(obj.pos, Vec3::new([1.0, 2.0, 3.0]));
                assert_eq!(obj.points[0], Vec3::new([2.0, 2.0, 2.0]));
            }
            SceneObject::Hyper(_) => panic!("Expected a 3D object"),
        }
    }

    #[test]
    fn test_template_serialization() {
        let template = ObjectTemplate::new(ShapeTemplate::Toroid {
            tube_radius: 1.0,
            ring_radius: 3.0,
            tube_segments: 8,
            ring_segments: 16,
        })
        .with_name("ring");
        let serialized = ron::to_string(&template).unwrap();
        let deserialized: ObjectTemplate = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, template);
    }
}
