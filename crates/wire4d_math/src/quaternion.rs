//! Quaternions for 3D and 4D rotation
//!
//! A 3D vector is lifted to the pure quaternion `(0, x, y, z)`. A 4D vector
//! `(x, y, z, u)` is lifted to `(u, x, y, z)`, so the real part carries the
//! 4th dimension. The sandwich `q1 * v * q2` then rotates:
//!
//! - with `q2 = conj(q1)`: the 3D plane orthogonal to q1's axis, fixing `u`
//! - with `q2 = q1`: the plane spanned by `u` and q1's axis

use std::ops::Mul;

use crate::Vector;

/// Imaginary slot of a quaternion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuatSlot {
    I,
    J,
    K,
}

/// How the right-hand quaternion of a rotation pair relates to the left one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pairing {
    /// `q v q*`: ordinary 3D rotation
    Conjugate,
    /// `q v q`: rotation mixing the real (u) part
    Equal,
}

/// Quaternion `w + i·i + j·j + k·k` with Hamilton multiplication
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub i: f32,
    pub j: f32,
    pub k: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self { w: 1.0, i: 0.0, j: 0.0, k: 0.0 };

    #[inline]
    pub const fn new(w: f32, i: f32, j: f32, k: f32) -> Self {
        Self { w, i, j, k }
    }

    /// Half-angle quaternion `cos(θ/2) + sin(θ/2)·e` for the given slot
    pub fn from_slot(slot: QuatSlot, angle: f32) -> Self {
        let (sin_h, cos_h) = (angle * 0.5).sin_cos();
        match slot {
            QuatSlot::I => Self::new(cos_h, sin_h, 0.0, 0.0),
            QuatSlot::J => Self::new(cos_h, 0.0, sin_h, 0.0),
            QuatSlot::K => Self::new(cos_h, 0.0, 0.0, sin_h),
        }
    }

    /// Left/right quaternions rotating by `angle` in one plane
    pub fn pair(slot: QuatSlot, angle: f32, pairing: Pairing) -> (Self, Self) {
        let q = Self::from_slot(slot, angle);
        match pairing {
            Pairing::Conjugate => (q, q.conjugate()),
            Pairing::Equal => (q, q),
        }
    }

    /// Lift a 3D or 4D vector into quaternion form
    pub fn from_vector<const N: usize>(v: Vector<N>) -> Self {
        assert!(
            N == 3 || N == 4,
            "only 3D and 4D vectors lift to quaternions, got {}D",
            N
        );
        let w = if N == 4 { v[3] } else { 0.0 };
        Self::new(w, v[0], v[1], v[2])
    }

    /// Write the quaternion back into a vector of the given dimension
    ///
    /// The real part is kept only for 4D vectors.
    pub fn to_vector<const N: usize>(self) -> Vector<N> {
        assert!(
            N == 3 || N == 4,
            "quaternions only lower to 3D or 4D vectors, got {}D",
            N
        );
        let mut v = Vector::<N>::zero();
        v[0] = self.i;
        v[1] = self.j;
        v[2] = self.k;
        if N == 4 {
            v[3] = self.w;
        }
        v
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.i, -self.j, -self.k)
    }

    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.w * self.w + self.i * self.i + self.j * self.j + self.k * self.k
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Multiplicative inverse
    ///
    /// The zero quaternion has no inverse and yields NaN components.
    #[inline]
    pub fn inverse(self) -> Self {
        let n = self.norm_squared();
        let c = self.conjugate();
        Self::new(c.w / n, c.i / n, c.j / n, c.k / n)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product: ij = k, jk = i, ki = j
    fn mul(self, o: Self) -> Self {
        Self::new(
            self.w * o.w - self.i * o.i - self.j * o.j - self.k * o.k,
            self.w * o.i + self.i * o.w + self.j * o.k - self.k * o.j,
            self.w * o.j - self.i * o.k + self.j * o.w + self.k * o.i,
            self.w * o.k + self.i * o.j - self.j * o.i + self.k * o.w,
        )
    }
}

/// Rotate `v` by the sandwich product `q1 * v * q2`
///
/// The result has the same dimension as `v`. For 3D input the real part of
/// the product is discarded.
pub fn quat_rot<const N: usize>(q1: Quaternion, v: Vector<N>, q2: Quaternion) -> Vector<N> {
    (q1 * Quaternion::from_vector(v) * q2).to_vector()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec3, Vec4};
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq<const N: usize>(a: Vector<N>, b: Vector<N>) -> bool {
        (0..N).all(|i| approx_eq(a[i], b[i]))
    }

    #[test]
    fn test_hamilton_units() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
        assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new([1.0, 2.0, 3.0]);
        let r = quat_rot(Quaternion::IDENTITY, v, Quaternion::IDENTITY);
        assert_eq!(r, v);
    }

    #[test]
    fn test_conjugate_pair_matches_rotate_3d() {
        let v = Vec3::new([0.3, -1.2, 2.0]);
        for (slot, axis) in [(QuatSlot::I, 0), (QuatSlot::J, 1), (QuatSlot::K, 2)] {
            let (q1, q2) = Quaternion::pair(slot, 0.8, Pairing::Conjugate);
            let r = quat_rot(q1, v, q2);
            assert!(
                vec_approx_eq(r, v.rotate_3d(0.8, axis)),
                "slot {:?}: {} vs {}",
                slot,
                r,
                v.rotate_3d(0.8, axis)
            );
        }
    }

    #[test]
    fn test_conjugate_pair_fixes_u() {
        let v = Vec4::new([1.0, 2.0, 3.0, 4.0]);
        let (q1, q2) = Quaternion::pair(QuatSlot::J, 1.1, Pairing::Conjugate);
        let r = quat_rot(q1, v, q2);
        assert!(approx_eq(r.u(), 4.0));
        assert!(approx_eq(r.length(), v.length()));
    }

    #[test]
    fn test_equal_pair_rotates_u_plane() {
        // q v q with an i-slot quaternion turns u into x by a quarter turn
        let (q1, q2) = Quaternion::pair(QuatSlot::I, FRAC_PI_2, Pairing::Equal);
        let r = quat_rot(q1, Vec4::unit(3), q2);
        assert!(vec_approx_eq(r, Vec4::unit(0)), "got {}", r);

        // and leaves y and z alone
        let r = quat_rot(q1, Vec4::new([0.0, 2.0, 3.0, 0.0]), q2);
        assert!(vec_approx_eq(r, Vec4::new([0.0, 2.0, 3.0, 0.0])), "got {}", r);
    }

    #[test]
    fn test_inverse_pair_round_trip() {
        let v = Vec4::new([0.5, -1.0, 2.0, 3.5]);
        let (q1, q2) = Quaternion::pair(QuatSlot::K, 2.1, Pairing::Equal);
        let forward = quat_rot(q1, v, q2);
        let back = quat_rot(q1.inverse(), forward, q2.inverse());
        assert!(vec_approx_eq(v, back), "got {}", back);
    }

    #[test]
    fn test_unit_quaternion_inverse_is_conjugate() {
        let q = Quaternion::from_slot(QuatSlot::J, 0.9);
        let inv = q.inverse();
        let c = q.conjugate();
        assert!(approx_eq(inv.w, c.w) && approx_eq(inv.j, c.j));
        assert!(approx_eq(q.norm(), 1.0));
    }
}
