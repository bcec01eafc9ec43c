//! 2D drawing surface used by the cameras
//!
//! Coordinates are in pixels relative to the viewport center with +y up.

use wire4d_core::Color;
use wire4d_math::Vec2;

/// Outline style for polygons
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f32,
}

/// Sink for projected primitives
pub trait Canvas {
    /// Plot a point as a square of side `thickness`
    fn point(&mut self, at: Vec2, color: Color, thickness: f32);

    /// Stroke a segment
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32);

    /// Fill and/or stroke a closed polygon
    fn polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>);
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Point { at: Vec2, color: Color, thickness: f32 },
    Line { from: Vec2, to: Vec2, color: Color, thickness: f32 },
    Polygon { points: Vec<Vec2>, stroke: Option<Stroke>, fill: Option<Color> },
}

/// Canvas that keeps every draw call, for headless rendering
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Positions of every recorded point
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Point { at, .. } => Some(*at),
            _ => None,
        })
    }

    /// Endpoints of every recorded line
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Vertices of every recorded polygon
    pub fn polygons(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn point(&mut self, at: Vec2, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Point { at, color, thickness });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, thickness });
    }

    fn polygon(&mut self, points: &[Vec2], stroke: Option<Stroke>, fill: Option<Color>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke,
            fill,
        });
    }
}
