//! Parallel-projection camera

use wire4d_input::InputSnapshot;
use wire4d_math::{Vec2, Vec3};

use super::{update_3d, Camera, CameraBody};
use crate::projection;

/// 3D camera with a parallel projection
///
/// Depth only matters for cropping; the apparent size of an object does not
/// change with distance.
#[derive(Clone, Debug)]
pub struct OrthographicCamera {
    body: CameraBody<3>,
}

impl OrthographicCamera {
    /// `rotation` holds pitch, yaw and roll in radians
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self::from_body(CameraBody::new(position, rotation))
    }

    pub fn from_body(body: CameraBody<3>) -> Self {
        Self { body }
    }

    pub fn into_body(self) -> CameraBody<3> {
        self.body
    }
}

impl Camera<3> for OrthographicCamera {
    fn body(&self) -> &CameraBody<3> {
        &self.body
    }

    fn body_mut(&mut self) -> &mut CameraBody<3> {
        &mut self.body
    }

    fn rotate_to_view(&self, v: Vec3) -> Vec3 {
        v.unorient(self.body.rotation)
    }

    fn rotate_from_view(&self, v: Vec3) -> Vec3 {
        v.orient(self.body.rotation)
    }

    fn crop(&self, v: Vec3) -> Option<Vec3> {
        (v.z() >= 0.0).then_some(v)
    }

    fn project(&self, v: Vec3, zoom: f32) -> Option<Vec2> {
        projection::orthographic(v, zoom)
    }

    fn update(&mut self, input: &InputSnapshot) {
        update_3d(&mut self.body, input);
    }
}
