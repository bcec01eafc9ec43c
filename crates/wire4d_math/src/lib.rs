//! Vector and rotation math for the wire4d visualizer
//!
//! ## Core Types
//!
//! - [`Vector`] - fixed-dimension vector, with [`Vec2`], [`Vec3`], [`Vec4`] aliases
//! - [`Quaternion`] - Hamilton quaternion used for 4D plane rotations
//! - [`quat_rot`] - sandwich rotation `q1 * v * q2` of a 3D or 4D vector

mod vector;
mod quaternion;

pub use vector::{Vector, Vec2, Vec3, Vec4};
pub use quaternion::{Quaternion, QuatSlot, Pairing, quat_rot};
