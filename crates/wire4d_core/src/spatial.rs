//! Spatial objects: point clouds, wireframes and solids
//!
//! A [`SpatialObject`] is a set of points in object-local coordinates plus an
//! origin offset and a [`Topology`] saying how the points connect. Cameras
//! read these during rendering and never keep references past one draw.

use serde::{Serialize, Deserialize};
use wire4d_math::{Vec3, Vec4, Vector};

use crate::error::GeometryError;

/// RGBA color with components in 0.0-1.0
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ])
    }

    /// Opaque grey from an 8-bit level
    pub fn grey(level: u8) -> Self {
        Self::from_rgb8(level, level, level)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

/// Per-object draw style
///
/// Fixed at construction; cameras only read it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub point_color: Color,
    pub point_thickness: f32,
    pub line_color: Color,
    pub line_thickness: f32,
    pub fill_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            point_color: Color::grey(230),
            point_thickness: 2.0,
            line_color: Color::grey(200),
            line_thickness: 1.0,
            fill_color: Color::from_rgba8(86, 210, 227, 64),
        }
    }
}

impl Style {
    /// Style with the given line color and defaults otherwise
    pub fn with_line_color(color: Color) -> Self {
        Self {
            line_color: color,
            ..Self::default()
        }
    }
}

/// How the points of an object connect
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
    /// Bare points
    Cloud,
    /// Segments as pairs of point indices
    Lines(Vec<[usize; 2]>),
    /// Closed planar polygons as index lists in winding order
    Polygons(Vec<Vec<usize>>),
}

/// Points with an origin offset, a topology and a style
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialObject<const N: usize> {
    /// Object-space origin offset
    pub pos: Vector<N>,
    /// Points relative to `pos`
    pub points: Vec<Vector<N>>,
    pub topology: Topology,
    pub style: Style,
}

impl<const N: usize> SpatialObject<N> {
    /// A bare point cloud
    pub fn point_cloud(pos: Vector<N>, points: Vec<Vector<N>>) -> Self {
        Self {
            pos,
            points,
            topology: Topology::Cloud,
            style: Style::default(),
        }
    }

    /// Points joined by line segments
    pub fn wireframe(pos: Vector<N>, points: Vec<Vector<N>>, lines: Vec<[usize; 2]>) -> Self {
        Self {
            pos,
            points,
            topology: Topology::Lines(lines),
            style: Style::default(),
        }
    }

    /// Points joined into polygons
    pub fn solid(pos: Vector<N>, points: Vec<Vector<N>>, polygons: Vec<Vec<usize>>) -> Self {
        Self {
            pos,
            points,
            topology: Topology::Polygons(polygons),
            style: Style::default(),
        }
    }

    /// Builder: replace the style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn is_wireframe(&self) -> bool {
        matches!(self.topology, Topology::Lines(_))
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.topology, Topology::Polygons(_))
    }

    /// Line segments, empty unless this is a wireframe
    pub fn lines(&self) -> &[[usize; 2]] {
        match &self.topology {
            Topology::Lines(lines) => lines,
            _ => &[],
        }
    }

    /// Polygons, empty unless this is a solid
    pub fn polygons(&self) -> &[Vec<usize>] {
        match &self.topology {
            Topology::Polygons(polygons) => polygons,
            _ => &[],
        }
    }

    /// Translate the origin by `v`
    pub fn move_by(&mut self, v: Vector<N>) -> &mut Self {
        self.pos += v;
        self
    }

    /// Scale every point about the object origin
    pub fn scale(&mut self, s: f32) -> &mut Self {
        for p in &mut self.points {
            *p *= s;
        }
        self
    }

    /// Rotate every point about the object origin
    ///
    /// See [`Vector::rotate_3d`] for the axis convention.
    pub fn rotate(&mut self, angle: f32, axis: usize) -> &mut Self {
        for p in &mut self.points {
            *p = p.rotate_3d(angle, axis);
        }
        self
    }

    /// Check that every topology index refers to an existing point
    pub fn validate(&self) -> Result<(), GeometryError> {
        let len = self.points.len();
        let check = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(GeometryError::IndexOutOfRange { index, len })
            }
        };

        match &self.topology {
            Topology::Cloud => Ok(()),
            Topology::Lines(lines) => lines.iter().flatten().try_for_each(|&i| check(i)),
            Topology::Polygons(polygons) => {
                for (polygon, indices) in polygons.iter().enumerate() {
                    if indices.len() < 3 {
                        return Err(GeometryError::DegeneratePolygon {
                            polygon,
                            vertices: indices.len(),
                        });
                    }
                    indices.iter().try_for_each(|&i| check(i))?;
                }
                Ok(())
            }
        }
    }

    /// Same topology and style with every point mapped through `f`
    fn map_points<const M: usize>(&self, f: impl Fn(Vector<N>) -> Vector<M>) -> SpatialObject<M> {
        SpatialObject {
            pos: f(self.pos),
            points: self.points.iter().map(|&p| f(p)).collect(),
            topology: self.topology.clone(),
            style: self.style,
        }
    }
}

impl SpatialObject<3> {
    /// Embed in 4D space at u = 0
    pub fn lift(&self) -> SpatialObject<4> {
        self.map_points(|p: Vec3| p.extend(0.0))
    }
}

impl SpatialObject<4> {
    /// Drop the u component of every point
    pub fn flatten(&self) -> SpatialObject<3> {
        self.map_points(|p: Vec4| p.xyz())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn segment() -> SpatialObject<3> {
        SpatialObject::wireframe(
            Vec3::zero(),
            vec![Vec3::zero(), Vec3::new([1.0, 0.0, 0.0])],
            vec![[0, 1]],
        )
    }

    #[test]
    fn test_move_accumulates() {
        let mut obj = segment();
        obj.move_by(Vec3::new([1.0, 2.0, 3.0]))
            .move_by(Vec3::new([1.0, 0.0, 0.0]));
        assert_eq!(obj.pos, Vec3::new([2.0, 2.0, 3.0]));
        // Points are untouched by moves
        assert_eq!(obj.points[1], Vec3::new([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_scale_about_local_origin() {
        let mut obj = segment();
        obj.move_by(Vec3::new([5.0, 0.0, 0.0])).scale(3.0);
        assert_eq!(obj.points[1], Vec3::new([3.0, 0.0, 0.0]));
        assert_eq!(obj.pos, Vec3::new([5.0, 0.0, 0.0]));
    }

    #[test]
    fn test_rotate_points() {
        let mut obj = segment();
        obj.rotate(FRAC_PI_2, 2);
        let p = obj.points[1];
        assert!(p.x().abs() < 1e-6);
        assert!((p.y() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_topology_queries() {
        let obj = segment();
        assert!(obj.is_wireframe());
        assert!(!obj.is_solid());
        assert_eq!(obj.lines(), &[[0, 1]]);
        assert!(obj.polygons().is_empty());
    }

    #[test]
    fn test_validate_accepts_good_topology() {
        assert!(segment().validate().is_ok());
        let cloud = SpatialObject::point_cloud(Vec3::zero(), vec![Vec3::zero()]);
        assert!(cloud.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_line_index() {
        let obj = SpatialObject::wireframe(Vec3::zero(), vec![Vec3::zero()], vec![[0, 4]]);
        assert_eq!(
            obj.validate(),
            Err(GeometryError::IndexOutOfRange { index: 4, len: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_polygon() {
        let obj = SpatialObject::solid(
            Vec3::zero(),
            vec![Vec3::zero(), Vec3::unit(0), Vec3::unit(1)],
            vec![vec![0, 1, 2], vec![0, 1]],
        );
        assert_eq!(
            obj.validate(),
            Err(GeometryError::DegeneratePolygon { polygon: 1, vertices: 2 })
        );
    }

    #[test]
    fn test_lift_and_flatten() {
        let lifted = segment().lift();
        assert_eq!(lifted.points[1], Vec4::new([1.0, 0.0, 0.0, 0.0]));
        assert_eq!(lifted.lines(), &[[0, 1]]);
        assert_eq!(lifted.flatten(), segment());
    }

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.point_thickness, 2.0);
        assert_eq!(style.line_thickness, 1.0);
        assert_eq!(style.fill_color, Color::from_rgba8(86, 210, 227, 64));
    }
}
