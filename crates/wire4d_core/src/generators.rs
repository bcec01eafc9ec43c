//! Procedural mesh generators
//!
//! Everything here is built centered on the object origin with `pos` at zero;
//! place the result with [`SpatialObject::move_by`].

use std::f32::consts::{PI, TAU};

use wire4d_math::{Vec3, Vec4};

use crate::spatial::{Color, SpatialObject, Style};

/// Axis-aligned cube with vertices at ±`l`: 8 points, 6 quads
pub fn cube(l: f32) -> SpatialObject<3> {
    let points = vec![
        Vec3::new([l, l, l]),
        Vec3::new([l, l, -l]),
        Vec3::new([l, -l, l]),
        Vec3::new([l, -l, -l]),
        Vec3::new([-l, l, l]),
        Vec3::new([-l, l, -l]),
        Vec3::new([-l, -l, l]),
        Vec3::new([-l, -l, -l]),
    ];
    let polygons = vec![
        vec![0, 1, 3, 2],
        vec![0, 2, 6, 4],
        vec![0, 1, 5, 4],
        vec![4, 5, 7, 6],
        vec![1, 3, 7, 5],
        vec![2, 3, 7, 6],
    ];
    SpatialObject::solid(Vec3::zero(), points, polygons)
}

/// Surface plot of `y = f(x, z)` over a `w` × `h` grid
///
/// The grid has `(wres + 1) * (hres + 1)` points and `wres * hres` quads.
pub fn function_plot(
    f: impl Fn(f32, f32) -> f32,
    w: f32,
    h: f32,
    wres: usize,
    hres: usize,
) -> SpatialObject<3> {
    let stride = hres + 1;
    let mut points = Vec::with_capacity((wres + 1) * stride);
    let mut polygons = Vec::with_capacity(wres * hres);

    for i in 0..=wres {
        for j in 0..=hres {
            let x = -w / 2.0 + i as f32 * w / wres as f32;
            let z = -h / 2.0 + j as f32 * h / hres as f32;
            points.push(Vec3::new([x, f(x, z), z]));

            if i < wres && j < hres {
                polygons.push(vec![
                    i * stride + j,
                    i * stride + j + 1,
                    (i + 1) * stride + j + 1,
                    (i + 1) * stride + j,
                ]);
            }
        }
    }

    SpatialObject::solid(Vec3::zero(), points, polygons)
}

/// The default plot, a saddle `x² - z²` on a 2 × 2 grid
pub fn saddle() -> SpatialObject<3> {
    function_plot(|x, z| x * x - z * z, 2.0, 2.0, 15, 15)
}

/// Arc traced by rotating `start` about `axis` in `n` steps through `angle`
///
/// Produces `n + 1` points. When `closed`, a final segment joins the last
/// point back to the first.
pub fn circle(axis: usize, start: Vec3, n: usize, closed: bool, angle: f32) -> SpatialObject<3> {
    let points = (0..=n)
        .map(|i| start.rotate_3d(i as f32 / n as f32 * angle, axis))
        .collect();

    let mut lines: Vec<[usize; 2]> = (0..n).map(|i| [i, i + 1]).collect();
    if closed {
        lines.push([n, 0]);
    }

    SpatialObject::wireframe(Vec3::zero(), points, lines)
}

/// Sweep the points of `profile` along `direction` by `len`, centered
///
/// Side quads join consecutive points. With `faces`, the two ends are capped
/// with one polygon each.
pub fn extrude(profile: &SpatialObject<3>, direction: Vec3, len: f32, faces: bool) -> SpatialObject<3> {
    let v = direction * (len / 2.0);
    let n = profile.points.len();
    if n == 0 {
        return SpatialObject::solid(Vec3::zero(), Vec::new(), Vec::new());
    }

    let points: Vec<Vec3> = profile
        .points
        .iter()
        .map(|&p| p - v)
        .chain(profile.points.iter().map(|&p| p + v))
        .collect();

    let mut polygons: Vec<Vec<usize>> = (0..n.saturating_sub(1))
        .map(|i| vec![i, i + 1, n + i + 1, n + i])
        .collect();
    polygons.push(vec![0, n - 1, 2 * n - 1, n]);

    if faces {
        polygons.push((0..n).collect());
        polygons.push((n..2 * n).collect());
    }

    SpatialObject::solid(Vec3::zero(), points, polygons)
}

/// Cylinder of radius `r` and length `len` along `axis`
pub fn cylinder(axis: usize, r: f32, n: usize, len: f32, faces: bool) -> SpatialObject<3> {
    let start = Vec3::unit((axis + 1) % 3) * r;
    let ring = circle(axis, start, n, true, TAU);
    extrude(&ring, Vec3::unit(axis), len, faces)
}

/// Parameters for [`revolution`]
#[derive(Clone, Copy, Debug)]
pub struct Revolution {
    /// Offset added to the profile before revolving
    pub start: Vec3,
    /// Axis of the main revolution
    pub axis: usize,
    /// Total main revolution angle
    pub angle: f32,
    /// Number of revolution steps
    pub steps: usize,
    /// Axis the profile twists about while revolving
    pub twist_axis: usize,
    /// Total twist angle over the whole revolution
    pub twist_angle: f32,
    /// Join the last profile point back to the first in every ring
    pub close: bool,
}

impl Default for Revolution {
    fn default() -> Self {
        Self {
            start: Vec3::new([1.0, 0.0, 0.0]),
            axis: 1,
            angle: TAU,
            steps: 32,
            twist_axis: 0,
            twist_angle: 0.0,
            close: true,
        }
    }
}

/// Surface of revolution of the points of `profile`
pub fn revolution(profile: &SpatialObject<3>, params: Revolution) -> SpatialObject<3> {
    let n = params.steps;
    let n1 = profile.points.len();

    let mut points = Vec::with_capacity((n + 1) * n1);
    for i in 0..=n {
        let t = i as f32 / n as f32;
        points.extend(profile.points.iter().map(|&p| {
            (p.rotate_3d(params.twist_angle * t, params.twist_axis) + params.start)
                .rotate_3d(params.angle * t, params.axis)
        }));
    }

    let mut polygons = Vec::new();
    for i in 0..n {
        for j in 0..n1.saturating_sub(1) {
            polygons.push(vec![
                i * n1 + j,
                i * n1 + j + 1,
                (i + 1) * n1 + j + 1,
                (i + 1) * n1 + j,
            ]);
        }
        if params.close {
            polygons.push(vec![i * n1, (i + 1) * n1 - 1, (i + 2) * n1 - 1, (i + 1) * n1]);
        }
    }

    SpatialObject::solid(Vec3::zero(), points, polygons)
}

/// Torus with tube radius `r1` and ring radius `r2`
pub fn toroid(r1: f32, r2: f32, n1: usize, n2: usize) -> SpatialObject<3> {
    let tube = circle(2, Vec3::new([r1, 0.0, 0.0]), n1, true, TAU);
    revolution(
        &tube,
        Revolution {
            start: Vec3::new([r2, 0.0, 0.0]),
            steps: n2,
            ..Revolution::default()
        },
    )
}

/// Sphere of radius `r` with `n1` parallels and `n2` meridians
pub fn sphere(r: f32, n1: usize, n2: usize) -> SpatialObject<3> {
    let meridian = circle(2, Vec3::new([0.0, r, 0.0]), n1, false, PI);
    revolution(
        &meridian,
        Revolution {
            start: Vec3::zero(),
            steps: n2,
            close: false,
            ..Revolution::default()
        },
    )
}

/// Torus whose tube cross-section twists by `angle` over one revolution
pub fn rot_toroid(r1: f32, r2: f32, n1: usize, n2: usize, angle: f32) -> SpatialObject<3> {
    let tube = circle(2, Vec3::new([r1, 0.0, 0.0]), n1, true, TAU);
    revolution(
        &tube,
        Revolution {
            start: Vec3::new([r2, 0.0, 0.0]),
            steps: n2,
            twist_axis: 2,
            twist_angle: angle,
            ..Revolution::default()
        },
    )
}

/// Möbius strip of half-width `r1` and radius `r2`
pub fn moebius(r1: f32, r2: f32, n: usize, angle: f32) -> SpatialObject<3> {
    let segment = circle(2, Vec3::new([r1, 0.0, 0.0]), 2, true, TAU);
    revolution(
        &segment,
        Revolution {
            start: Vec3::new([r2, 0.0, 0.0]),
            steps: n,
            twist_axis: 2,
            twist_angle: angle,
            ..Revolution::default()
        },
    )
}

/// Tesseract wireframe with vertices at ±`size`/2: 16 points, 32 edges
pub fn tesseract(size: f32) -> SpatialObject<4> {
    let h = size * 0.5;

    // Vertex i takes +h on every axis whose bit is set in i
    let points: Vec<Vec4> = (0..16usize)
        .map(|i| Vec4::new(std::array::from_fn(|axis| if i & (1 << axis) != 0 { h } else { -h })))
        .collect();

    // Edges join vertices differing in exactly one bit
    let mut lines = Vec::with_capacity(32);
    for i in 0..16usize {
        for axis in 0..4 {
            let j = i | (1 << axis);
            if j != i {
                lines.push([i, j]);
            }
        }
    }

    SpatialObject::wireframe(Vec4::zero(), points, lines)
        .with_style(Style::with_line_color(Color::from_rgb8(227, 86, 210)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let c = cube(1.0);
        assert_eq!(c.points.len(), 8);
        assert_eq!(c.polygons().len(), 6);
        assert!(c.polygons().iter().all(|p| p.len() == 4));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_function_plot_grid() {
        let plot = function_plot(|x, z| x + z, 2.0, 4.0, 4, 2);
        assert_eq!(plot.points.len(), 5 * 3);
        assert_eq!(plot.polygons().len(), 4 * 2);
        assert!(plot.validate().is_ok());
        // First point is the (-w/2, -h/2) corner
        assert_eq!(plot.points[0], Vec3::new([-1.0, -3.0, -2.0]));
    }

    #[test]
    fn test_circle_closed() {
        let c = circle(2, Vec3::new([1.0, 0.0, 0.0]), 8, true, TAU);
        assert_eq!(c.points.len(), 9);
        assert_eq!(c.lines().len(), 9);
        assert_eq!(c.lines()[8], [8, 0]);
        assert!(c.points.iter().all(|p| (p.length() - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_circle_open() {
        let c = circle(2, Vec3::new([0.0, 1.0, 0.0]), 4, false, PI);
        assert_eq!(c.lines().len(), 4);
        let last = c.points[4];
        assert!((last.y() + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cylinder_along_axis() {
        let cyl = cylinder(1, 1.0, 8, 3.0, true);
        assert_eq!(cyl.points.len(), 18);
        // 8 side quads from consecutive pairs, 1 seam, 2 caps
        assert_eq!(cyl.polygons().len(), 8 + 1 + 2);
        assert!(cyl.validate().is_ok());
        let ys: Vec<f32> = cyl.points.iter().map(|p| p.y()).collect();
        assert!(ys.iter().all(|&y| (y.abs() - 1.5).abs() < 1e-5));
    }

    #[test]
    fn test_extrude_empty_profile() {
        let empty = SpatialObject::wireframe(Vec3::zero(), Vec::new(), Vec::new());
        let solid = extrude(&empty, Vec3::unit(2), 2.0, true);
        assert!(solid.points.is_empty());
        assert!(solid.polygons().is_empty());
    }

    #[test]
    fn test_toroid_valid() {
        let t = toroid(1.0, 3.0, 16, 32);
        assert_eq!(t.points.len(), 17 * 33);
        assert!(t.validate().is_ok());
        // Every point sits within the ring bounds
        for p in &t.points {
            let radial = (p.x() * p.x() + p.z() * p.z()).sqrt();
            assert!(radial >= 2.0 - 1e-4 && radial <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_sphere_radius() {
        let s = sphere(2.0, 8, 16);
        assert!(s.validate().is_ok());
        assert!(s.points.iter().all(|p| (p.length() - 2.0).abs() < 1e-4));
    }

    #[test]
    fn test_moebius_and_rot_toroid_valid() {
        assert!(moebius(1.0, 3.0, 64, PI).validate().is_ok());
        assert!(rot_toroid(1.0, 3.0, 4, 64, 3.0 * PI / 2.0).validate().is_ok());
    }

    #[test]
    fn test_tesseract_counts() {
        let t = tesseract(2.0);
        assert_eq!(t.points.len(), 16);
        assert_eq!(t.lines().len(), 32);
        assert!(t.validate().is_ok());
        // Every edge spans the full side length
        for &[a, b] in t.lines() {
            let d = t.points[b] - t.points[a];
            assert!((d.length() - 2.0).abs() < 1e-6);
        }
    }
}
