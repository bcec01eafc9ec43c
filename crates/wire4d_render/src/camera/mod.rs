//! Cameras: view rotation, cropping and projection of spatial objects
//!
//! Every camera runs the same per-point pipeline in [`Camera::transform`]:
//!
//! 1. make the point camera-relative: `point + object.pos - camera.pos`
//! 2. rotate it into view with [`Camera::rotate_to_view`]
//! 3. if cropping is on, drop it when [`Camera::crop`] rejects it
//! 4. project it onto the canvas with [`Camera::project`]
//!
//! A point that is dropped at any step is `None` and is not drawn, and
//! neither is any line or polygon that uses it.

mod orthographic;
mod perspective;
mod perspective4d;

pub use orthographic::OrthographicCamera;
pub use perspective::PerspectiveCamera;
pub use perspective4d::Perspective4DCamera;

use std::borrow::Borrow;
use std::f32::consts::{FRAC_PI_2, TAU};

use bitflags::bitflags;
use wire4d_core::{Color, SpatialObject, Style};
use wire4d_input::{HeldKeys, InputSnapshot};
use wire4d_math::{Vec2, Vec3, Vector};

use crate::canvas::{Canvas, Stroke};

bitflags! {
    /// Draw toggles read at draw time
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DrawFlags: u8 {
        /// Plot every point
        const POINTS = 1 << 0;
        /// Stroke wireframe lines and polygon outlines
        const LINES = 1 << 1;
        /// Fill polygons
        const POLYGONS = 1 << 2;
        /// Skip points behind the camera
        const CROP = 1 << 3;
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Per-frame view settings shared by every camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSettings {
    pub flags: DrawFlags,
    pub zoom: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            flags: DrawFlags::default(),
            zoom: 500.0,
        }
    }
}

/// Gizmo colors for the x, y, z and u axes
const GIZMO_COLORS: [(u8, u8, u8); 4] = [(86, 210, 227), (105, 227, 86), (227, 103, 86), (227, 86, 210)];

/// One unit segment per axis, from the world origin
pub fn axis_gizmos<const N: usize>() -> Vec<SpatialObject<N>> {
    (0..N)
        .map(|axis| {
            let (r, g, b) = GIZMO_COLORS[axis % GIZMO_COLORS.len()];
            SpatialObject::wireframe(
                Vector::zero(),
                vec![Vector::zero(), Vector::unit(axis)],
                vec![[0, 1]],
            )
            .with_style(Style::with_line_color(Color::from_rgb8(r, g, b)))
        })
        .collect()
}

/// State shared by every camera
#[derive(Clone, Debug)]
pub struct CameraBody<const N: usize> {
    pub position: Vector<N>,
    /// One angle per rotation axis
    pub rotation: Vector<N>,
    /// Axis indicators drawn before the scene
    pub gizmos: Vec<SpatialObject<N>>,
    /// Translation per frame for each held movement key
    pub move_speed: f32,
    /// Radians per pixel of drag
    pub rot_speed: f32,
}

impl<const N: usize> CameraBody<N> {
    pub fn new(position: Vector<N>, rotation: Vector<N>) -> Self {
        Self {
            position,
            rotation,
            gizmos: axis_gizmos(),
            move_speed: 0.1,
            rot_speed: 0.002,
        }
    }

    /// Builder: set the movement step
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set the drag sensitivity
    pub fn with_rot_speed(mut self, speed: f32) -> Self {
        self.rot_speed = speed;
        self
    }
}

/// A camera that projects N-dimensional objects onto a 2D canvas
pub trait Camera<const N: usize> {
    fn body(&self) -> &CameraBody<N>;

    fn body_mut(&mut self) -> &mut CameraBody<N>;

    /// Rotate a camera-relative point into camera space
    fn rotate_to_view(&self, v: Vector<N>) -> Vector<N>;

    /// Rotate a camera-space direction back into world space
    ///
    /// Exact inverse of [`Camera::rotate_to_view`].
    fn rotate_from_view(&self, v: Vector<N>) -> Vector<N>;

    /// Visibility test in camera space; `None` when the point is cropped
    fn crop(&self, v: Vector<N>) -> Option<Vector<N>>;

    /// Project a camera-space point onto the canvas
    fn project(&self, v: Vector<N>, zoom: f32) -> Option<Vec2>;

    /// Apply one frame of input
    fn update(&mut self, input: &InputSnapshot);

    fn position(&self) -> Vector<N> {
        self.body().position
    }

    fn rotation(&self) -> Vector<N> {
        self.body().rotation
    }

    /// Canvas position of one point of `obj`
    fn transform(&self, p: Vector<N>, obj: &SpatialObject<N>, view: &ViewSettings) -> Option<Vec2> {
        let v = self.rotate_to_view(p + obj.pos - self.body().position);
        let v = if view.flags.contains(DrawFlags::CROP) {
            self.crop(v)?
        } else {
            v
        };
        self.project(v, view.zoom)
    }

    /// Draw one object
    fn draw(&self, obj: &SpatialObject<N>, view: &ViewSettings, canvas: &mut impl Canvas) {
        let projected: Vec<Option<Vec2>> = obj
            .points
            .iter()
            .map(|&p| self.transform(p, obj, view))
            .collect();
        let style = &obj.style;

        if view.flags.contains(DrawFlags::POINTS) {
            for p in projected.iter().flatten() {
                canvas.point(*p, style.point_color, style.point_thickness);
            }
        }

        if view.flags.contains(DrawFlags::LINES) {
            for &[a, b] in obj.lines() {
                if let (Some(from), Some(to)) = (projected[a], projected[b]) {
                    canvas.line(from, to, style.line_color, style.line_thickness);
                }
            }
        }

        let stroke = view.flags.contains(DrawFlags::LINES).then_some(Stroke {
            color: style.line_color,
            thickness: style.line_thickness,
        });
        let fill = view.flags.contains(DrawFlags::POLYGONS).then_some(style.fill_color);
        if stroke.is_none() && fill.is_none() {
            return;
        }

        let mut vertices = Vec::new();
        for polygon in obj.polygons() {
            vertices.clear();
            let complete = polygon.iter().all(|&i| match projected[i] {
                Some(p) => {
                    vertices.push(p);
                    true
                }
                None => false,
            });
            if complete {
                canvas.polygon(&vertices, stroke, fill);
            }
        }
    }

    /// Draw the axis gizmos and then every object, in order
    ///
    /// Gizmo lines are drawn whatever the draw toggles say. Their end points
    /// follow the points toggle and cropping still applies.
    fn render<I>(&self, objects: I, view: &ViewSettings, canvas: &mut impl Canvas)
    where
        I: IntoIterator,
        I::Item: Borrow<SpatialObject<N>>,
    {
        let gizmo_view = ViewSettings {
            flags: DrawFlags::LINES | (view.flags & (DrawFlags::POINTS | DrawFlags::CROP)),
            zoom: view.zoom,
        };
        for gizmo in &self.body().gizmos {
            self.draw(gizmo, &gizmo_view, canvas);
        }

        for obj in objects {
            self.draw(obj.borrow(), view, canvas);
        }
    }
}

/// Drop the vertical component and rescale to unit length
///
/// `None` when the direction is vertical.
fn leveled(v: Vec3) -> Option<Vec3> {
    let flat = v.with(1, 0.0);
    (flat.length_squared() > f32::EPSILON).then(|| flat.normalized())
}

/// One frame of first-person movement for the 3D cameras
///
/// Forward and strafe follow the view direction projected onto the
/// horizontal plane, so walking never changes height.
pub(crate) fn update_3d(body: &mut CameraBody<3>, input: &InputSnapshot) {
    let speed = body.move_speed;
    let keys = input.keys;

    let forward = leveled(Vec3::unit(2).orient(body.rotation));
    let strafe = leveled(Vec3::unit(0).orient(body.rotation));
    if let Some(forward) = forward {
        body.position += forward * (keys.axis(HeldKeys::FORWARD, HeldKeys::BACKWARD) * speed);
    }
    if let Some(strafe) = strafe {
        body.position += strafe * (keys.axis(HeldKeys::RIGHT, HeldKeys::LEFT) * speed);
    }
    if keys.contains(HeldKeys::UP) {
        body.position[1] += speed;
    }
    if keys.contains(HeldKeys::DOWN) {
        body.position[1] -= speed / 2.0;
    }

    // Roll
    body.rotation[2] += keys.axis(HeldKeys::ROT_LEFT, HeldKeys::ROT_RIGHT) * speed / 2.0;

    if input.rotate_drag {
        let drag = input.drag_delta;
        body.rotation[1] = (body.rotation[1] + drag.x() * body.rot_speed) % TAU;
        body.rotation[0] = (body.rotation[0] + drag.y() * body.rot_speed).clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}
