//! Tessellation of canvas primitives into GPU triangles
//!
//! [`FrameCanvas`] turns points, lines and polygons into a flat triangle
//! list of [`Vertex2D`] in draw order, ready for the canvas pipeline.

use wire4d_core::Color;
use wire4d_math::Vec2;

use crate::canvas::{Canvas, Stroke};
use crate::pipeline::Vertex2D;

/// Canvas that builds a triangle list for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameCanvas {
    vertices: Vec<Vertex2D>,
}

impl FrameCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let color = color.to_array();
        for p in [a, b, c] {
            self.vertices.push(Vertex2D::new([p.x(), p.y()], color));
        }
    }

    /// Two triangles covering the quad a-b-c-d
    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
        self.triangle(a, b, c, color);
        self.triangle(a, c, d, color);
    }
}

impl Canvas for FrameCanvas {
    fn point(&mut self, at: Vec2, color: Color, thickness: f32) {
        let h = thickness * 0.5;
        self.quad(
            at + Vec2::new([-h, -h]),
            at + Vec2::new([h, -h]),
            at + Vec2::new([h, h]),
            at + Vec2::new([-h, h]),
            color,
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        let dir = to - from;
        let len = dir.length();
        if len <= f32::EPSILON {
            self.point(from, color, thickness);
            return;
        }
        // Half-width offset perpendicular to the segment
        let n = Vec2::new([-dir.y(), dir.x()]) * (thickness * 0.5 / len);
        self.quad(from - n, to - n, to + n, from + n, color);
    }

    fn polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>) {
        if let Some(fill) = fill {
            for pair in points.windows(2).skip(1) {
                self.triangle(points[0], pair[0], pair[1], fill);
            }
        }
        if let Some(stroke) = stroke {
            for (i, &from) in points.iter().enumerate() {
                let to = points[(i + 1) % points.len()];
                self.line(from, to, stroke.color, stroke.thickness);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new([0.0, 0.0]),
            Vec2::new([10.0, 0.0]),
            Vec2::new([10.0, 10.0]),
            Vec2::new([0.0, 10.0]),
        ]
    }

    #[test]
    fn test_point_is_square() {
        let mut canvas = FrameCanvas::new();
        canvas.point(Vec2::new([5.0, 5.0]), Color::WHITE, 2.0);
        assert_eq!(canvas.vertex_count(), 6);
        for v in canvas.vertices() {
            assert!(approx_eq((v.position[0] - 5.0).abs(), 1.0));
            assert!(approx_eq((v.position[1] - 5.0).abs(), 1.0));
            assert_eq!(v.color, [1.0; 4]);
        }
    }

    #[test]
    fn test_line_width() {
        let mut canvas = FrameCanvas::new();
        canvas.line(Vec2::zero(), Vec2::new([10.0, 0.0]), Color::WHITE, 4.0);
        assert_eq!(canvas.vertex_count(), 6);
        for v in canvas.vertices() {
            assert!(approx_eq(v.position[1].abs(), 2.0));
        }
    }

    #[test]
    fn test_zero_length_line_becomes_point() {
        let mut canvas = FrameCanvas::new();
        canvas.line(Vec2::splat(3.0), Vec2::splat(3.0), Color::WHITE, 2.0);
        assert_eq!(canvas.vertex_count(), 6);
        assert!(canvas.vertices().iter().all(|v| v.position.iter().all(|c| c.is_finite())));
    }

    #[test]
    fn test_polygon_fill_fan() {
        let mut canvas = FrameCanvas::new();
        let fill = Color::from_rgba8(86, 210, 227, 64);
        canvas.polygon(&square(), None, Some(fill));
        // Two fan triangles
        assert_eq!(canvas.vertex_count(), 6);
        assert!(canvas.vertices().iter().all(|v| v.color == fill.to_array()));
    }

    #[test]
    fn test_polygon_fill_then_stroke() {
        let mut canvas = FrameCanvas::new();
        let stroke = Stroke {
            color: Color::grey(200),
            thickness: 1.0,
        };
        canvas.polygon(&square(), Some(stroke), Some(Color::WHITE));
        // 2 fill triangles, then 4 closing edges of 2 triangles each
        assert_eq!(canvas.vertex_count(), 6 + 4 * 6);
        assert_eq!(canvas.vertices()[0].color, [1.0; 4]);
        assert_eq!(canvas.vertices()[6].color, Color::grey(200).to_array());
    }

    #[test]
    fn test_invisible_polygon() {
        let mut canvas = FrameCanvas::new();
        canvas.polygon(&square(), None, None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = FrameCanvas::new();
        canvas.point(Vec2::zero(), Color::WHITE, 1.0);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
