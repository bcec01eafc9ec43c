//! N-dimensional vector type
//!
//! The dimension is a const parameter, so mixing a 3D and a 4D vector in one
//! operation is a type error rather than a runtime surprise. Operations that
//! only make sense above a minimum dimension (`rotate_3d`, the named `z`/`u`
//! accessors) panic when called on a vector that is too short.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Fixed-dimension vector of `f32` components
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize> {
    data: [f32; N],
}

/// 2D vector (projected screen coordinates)
pub type Vec2 = Vector<2>;
/// 3D vector
pub type Vec3 = Vector<3>;
/// 4D vector, the 4th component is `u`
pub type Vec4 = Vector<4>;

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Vector<N> {
    /// Create a vector from its components
    #[inline]
    pub const fn new(data: [f32; N]) -> Self {
        Self { data }
    }

    /// All components zero
    #[inline]
    pub const fn zero() -> Self {
        Self { data: [0.0; N] }
    }

    /// All components set to `value`
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self { data: [value; N] }
    }

    /// Unit vector along `axis`
    pub fn unit(axis: usize) -> Self {
        assert!(axis < N, "axis {} out of range for a {}D vector", axis, N);
        let mut v = Self::zero();
        v.data[axis] = 1.0;
        v
    }

    /// Number of components
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Component at `axis`
    #[inline]
    pub fn get(&self, axis: usize) -> f32 {
        self.data[axis]
    }

    /// Overwrite the component at `axis`
    #[inline]
    pub fn set(&mut self, axis: usize, value: f32) -> &mut Self {
        self.data[axis] = value;
        self
    }

    /// Copy of this vector with the component at `axis` replaced
    #[inline]
    pub fn with(mut self, axis: usize, value: f32) -> Self {
        self.data[axis] = value;
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// The 4th spatial component
    #[inline]
    pub fn u(&self) -> f32 {
        self.data[3]
    }

    /// Components as an array
    #[inline]
    pub fn to_array(self) -> [f32; N] {
        self.data
    }

    /// Components as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum()
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divide by the Euclidean length
    ///
    /// A zero-length vector yields NaN components; callers that can produce
    /// one must check first.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Normalize in place
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self { data: self.data.map(f) }
    }

    /// True when no component is NaN or infinite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Keep the first `M` components
    pub fn truncate<const M: usize>(self) -> Vector<M> {
        assert!(M <= N, "cannot truncate a {}D vector to {}D", N, M);
        Vector::new(std::array::from_fn(|i| self.data[i]))
    }

    /// Rotate by `angle` radians within the plane orthogonal to `axis`
    ///
    /// Axis 0 rotates (y, z), axis 1 rotates (z, x), axis 2 rotates (x, y),
    /// all right-handed. Components past the third are left alone, so this
    /// also rotates the 3D part of a 4D vector.
    pub fn rotate_3d(self, angle: f32, axis: usize) -> Self {
        assert!(N >= 3, "rotate_3d needs at least 3 components, got {}", N);
        assert!(axis < 3, "rotate_3d axis must be 0, 1 or 2, got {}", axis);

        let a = (axis + 1) % 3;
        let b = (axis + 2) % 3;
        let (sin, cos) = angle.sin_cos();

        let mut out = self;
        out.data[a] = self.data[a] * cos - self.data[b] * sin;
        out.data[b] = self.data[a] * sin + self.data[b] * cos;
        out
    }

    /// Forward orientation by Euler angles: X first, then Y, then Z
    pub fn orient(self, rotation: Vec3) -> Self {
        self.rotate_3d(rotation.x(), 0)
            .rotate_3d(rotation.y(), 1)
            .rotate_3d(rotation.z(), 2)
    }

    /// Exact inverse of [`Vector::orient`]: undo Z, then Y, then X
    pub fn unorient(self, rotation: Vec3) -> Self {
        self.rotate_3d(-rotation.z(), 2)
            .rotate_3d(-rotation.y(), 1)
            .rotate_3d(-rotation.x(), 0)
    }
}

impl Vec2 {
    /// Rotate counter-clockwise by `angle` radians
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            self.data[0] * cos - self.data[1] * sin,
            self.data[0] * sin + self.data[1] * cos,
        ])
    }
}

impl Vec3 {
    /// Append a 4th component
    #[inline]
    pub fn extend(self, u: f32) -> Vec4 {
        Vec4::new([self.data[0], self.data[1], self.data[2], u])
    }
}

impl Vec4 {
    /// The x, y, z part
    #[inline]
    pub fn xyz(self) -> Vec3 {
        self.truncate()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(data: [f32; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    fn from(v: Vector<N>) -> Self {
        v.data
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.data[axis]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.data[axis]
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.3}", c)?;
        }
        write!(f, ")")
    }
}

// Operator overloads

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] + other.data[i]))
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a += b;
        }
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] - other.data[i]))
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.data.iter_mut().zip(other.data) {
            *a -= b;
        }
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        self.map(|c| c * scalar)
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        for c in self.data.iter_mut() {
            *c *= scalar;
        }
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        self.map(|c| c / scalar)
    }
}

impl<const N: usize> DivAssign<f32> for Vector<N> {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        for c in self.data.iter_mut() {
            *c /= scalar;
        }
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq<const N: usize>(a: Vector<N>, b: Vector<N>) -> bool {
        (0..N).all(|i| approx_eq(a[i], b[i]))
    }

    #[test]
    fn test_new_and_accessors() {
        let v = Vec4::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.u(), 4.0);
        assert_eq!(v.dim(), 4);
    }

    #[test]
    #[should_panic]
    fn test_u_on_3d_vector_panics() {
        let v = Vec3::new([1.0, 2.0, 3.0]);
        let _ = v.u();
    }

    #[test]
    fn test_set_chains() {
        let mut v = Vec3::zero();
        v.set(0, 1.0).set(2, 3.0);
        assert_eq!(v, Vec3::new([1.0, 0.0, 3.0]));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new([1.0, 2.0, 3.0]);
        let b = Vec3::new([5.0, 6.0, 7.0]);
        assert_eq!(a + b, Vec3::new([6.0, 8.0, 10.0]));
        assert_eq!(b - a, Vec3::new([4.0, 4.0, 4.0]));
        assert_eq!(a * 2.0, Vec3::new([2.0, 4.0, 6.0]));
        assert_eq!(b / 2.0, Vec3::new([2.5, 3.0, 3.5]));
        assert_eq!(-a, Vec3::new([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vec3::new([2.5, 3.0, 3.5]));
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Vec3::new([1.0, 2.0, 3.0]);
        let mut b = a;
        b.set(0, 9.0);
        assert_eq!(a.x(), 1.0);
    }

    #[test]
    fn test_dot_and_length() {
        let a = Vec4::new([1.0, 2.0, 3.0, 4.0]);
        let b = Vec4::new([5.0, 6.0, 7.0, 8.0]);
        assert_eq!(a.dot(b), 70.0);
        assert!(approx_eq(Vec4::splat(1.0).length(), 2.0));
    }

    #[test]
    fn test_normalized() {
        let n = Vec3::new([3.0, 0.0, 4.0]).normalized();
        assert!(vec_approx_eq(n, Vec3::new([0.6, 0.0, 0.8])));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::zero().normalized();
        assert!(n.x().is_nan());
        assert!(!n.is_finite());
    }

    #[test]
    fn test_map() {
        let v = Vec3::new([1.0, -2.0, 3.0]).map(f32::abs);
        assert_eq!(v, Vec3::new([1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_rotate_3d_quarter_turns() {
        // Axis 2 takes X to Y
        let v = Vec3::unit(0).rotate_3d(FRAC_PI_2, 2);
        assert!(vec_approx_eq(v, Vec3::unit(1)), "got {}", v);

        // Axis 0 takes Y to Z
        let v = Vec3::unit(1).rotate_3d(FRAC_PI_2, 0);
        assert!(vec_approx_eq(v, Vec3::unit(2)), "got {}", v);

        // Axis 1 takes Z to X
        let v = Vec3::unit(2).rotate_3d(FRAC_PI_2, 1);
        assert!(vec_approx_eq(v, Vec3::unit(0)), "got {}", v);
    }

    #[test]
    fn test_rotate_3d_round_trip() {
        let v = Vec3::new([1.5, -2.0, 0.25]);
        for axis in 0..3 {
            for angle in [0.1, 1.0, PI, -2.7] {
                let back = v.rotate_3d(angle, axis).rotate_3d(-angle, axis);
                assert!(vec_approx_eq(v, back), "axis {} angle {}", axis, angle);
            }
        }
    }

    #[test]
    fn test_rotate_3d_leaves_u_alone() {
        let v = Vec4::new([1.0, 2.0, 3.0, 7.0]).rotate_3d(1.2, 1);
        assert_eq!(v.u(), 7.0);
    }

    #[test]
    fn test_unorient_inverts_orient() {
        let rotation = Vec3::new([0.7, -2.3, 0.4]);
        let p = Vec3::new([1.0, -3.0, 2.5]);
        let back = p.orient(rotation).unorient(rotation);
        assert!(vec_approx_eq(p, back), "got {}", back);
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new([1.0, 0.0]).rotate(FRAC_PI_2);
        assert!(vec_approx_eq(v, Vec2::new([0.0, 1.0])));
    }

    #[test]
    fn test_truncate_and_extend() {
        let v = Vec4::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.xyz(), Vec3::new([1.0, 2.0, 3.0]));
        assert_eq!(v.xyz().extend(9.0), Vec4::new([1.0, 2.0, 3.0, 9.0]));
        let flat: Vec2 = v.truncate();
        assert_eq!(flat, Vec2::new([1.0, 2.0]));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vec2::new([1.0, 2.5])), "(1.000, 2.500)");
    }
}
