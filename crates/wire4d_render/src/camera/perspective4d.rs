//! Perspective camera for 4D space
//!
//! Points are rotated into view with four quaternion sandwich products, one
//! per rotation angle, then collapsed to 3D by dividing by u and projected
//! like the 3D perspective camera.
//!
//! | angle | slot | pair          | plane |
//! |-------|------|---------------|-------|
//! | 0     | i    | `q v q*`      | y-z   |
//! | 1     | i    | `q v q`       | u-x   |
//! | 2     | j    | `q v q*`      | z-x   |
//! | 3     | k    | `q v q`       | u-z   |
//!
//! This is four successive simple rotations, not a general 4D rotor, and the
//! order matters.

use wire4d_input::{HeldKeys, InputSnapshot};
use wire4d_math::{quat_rot, Pairing, QuatSlot, Quaternion, Vec2, Vec4};

use super::{Camera, CameraBody};
use crate::projection;

/// Quaternion slot and pairing for each rotation angle
const ROTATION_AXES: [(QuatSlot, Pairing); 4] = [
    (QuatSlot::I, Pairing::Conjugate),
    (QuatSlot::I, Pairing::Equal),
    (QuatSlot::J, Pairing::Conjugate),
    (QuatSlot::K, Pairing::Equal),
];

fn rotate_axis(v: Vec4, axis: usize, angle: f32) -> Vec4 {
    let (slot, pairing) = ROTATION_AXES[axis];
    let (q1, q2) = Quaternion::pair(slot, angle, pairing);
    quat_rot(q1, v, q2)
}

/// 4D camera with a perspective projection
#[derive(Clone, Debug)]
pub struct Perspective4DCamera {
    body: CameraBody<4>,
}

impl Perspective4DCamera {
    pub fn new(position: Vec4, rotation: Vec4) -> Self {
        Self::from_body(CameraBody::new(position, rotation))
    }

    pub fn from_body(body: CameraBody<4>) -> Self {
        Self { body }
    }

    pub fn into_body(self) -> CameraBody<4> {
        self.body
    }
}

impl Camera<4> for Perspective4DCamera {
    fn body(&self) -> &CameraBody<4> {
        &self.body
    }

    fn body_mut(&mut self) -> &mut CameraBody<4> {
        &mut self.body
    }

    /// Undo each rotation angle in order 0, 1, 2, 3
    fn rotate_to_view(&self, v: Vec4) -> Vec4 {
        (0..4).fold(v, |v, axis| rotate_axis(v, axis, -self.body.rotation[axis]))
    }

    fn rotate_from_view(&self, v: Vec4) -> Vec4 {
        (0..4).rev().fold(v, |v, axis| rotate_axis(v, axis, self.body.rotation[axis]))
    }

    /// Points with negative u or negative depth are cropped
    fn crop(&self, v: Vec4) -> Option<Vec4> {
        (v.u() >= 0.0 && v.z() >= 0.0).then_some(v)
    }

    fn project(&self, v: Vec4, zoom: f32) -> Option<Vec2> {
        projection::perspective(projection::collapse_4d(v), zoom)
    }

    /// Move along the world axes, with no leveling
    ///
    /// Left/Right turn angle 1, Up/Down turn angle 3. Dragging turns angle 0
    /// vertically and angle 2 horizontally.
    fn update(&mut self, input: &InputSnapshot) {
        let body = &mut self.body;
        let speed = body.move_speed;
        let keys = input.keys;

        let step = Vec4::new([
            keys.axis(HeldKeys::RIGHT, HeldKeys::LEFT),
            keys.axis(HeldKeys::UP, HeldKeys::DOWN),
            keys.axis(HeldKeys::FORWARD, HeldKeys::BACKWARD),
            keys.axis(HeldKeys::ANA, HeldKeys::KATA),
        ]);
        body.position += step * speed;

        body.rotation[1] += keys.axis(HeldKeys::ROT_LEFT, HeldKeys::ROT_RIGHT) * speed / 2.0;
        body.rotation[3] += keys.axis(HeldKeys::ROT_UP, HeldKeys::ROT_DOWN) * speed / 2.0;

        if input.rotate_drag {
            let drag = input.drag_delta;
            body.rotation[0] += drag.y() * body.rot_speed;
            body.rotation[2] += drag.x() * body.rot_speed;
        }
    }
}
