//! Projection from camera space to the 2D canvas
//!
//! Camera space has the viewer at the origin looking along +z with +y up.
//! A projection that cannot be represented (division by a zero depth, or
//! non-finite input) yields `None` and the point is not drawn.

use wire4d_math::{Vec2, Vec3, Vec4};

/// Parallel projection: drop the depth and scale by `zoom / 10`
pub fn orthographic(p: Vec3, zoom: f32) -> Option<Vec2> {
    finite(Vec2::new([p.x(), p.y()]) * (zoom / 10.0))
}

/// Pinhole projection: scale (x, y) by `zoom / z`
pub fn perspective(p: Vec3, zoom: f32) -> Option<Vec2> {
    finite(Vec2::new([p.x(), p.y()]) * (zoom / p.z()))
}

/// Homogeneous divide of (x, y, z) by u
///
/// The result may be non-finite when u is zero; the following projection
/// step rejects it.
pub fn collapse_4d(p: Vec4) -> Vec3 {
    p.xyz() / p.u()
}

fn finite(p: Vec2) -> Option<Vec2> {
    p.is_finite().then_some(p)
}
