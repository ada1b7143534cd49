//! Thin wrapper around `glam::DVec3` shared across the generators.
//!
//! `glam` already provides scaling (in either operand order), addition and
//! negation. The helpers here add the length-based operations the
//! tessellators need, with normalization that refuses zero-length input
//! instead of producing NaN.

use crate::error::{MeshError, MeshResult};

pub use glam::DVec3 as Point;

/// Creates a point from its three coordinates.
///
/// # Examples
/// ```
/// use figure_mesh::core::vec3::{point, Point};
/// assert_eq!(point(1.0, 2.0, 3.0), Point::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Euclidean norm of a vector.
///
/// # Examples
/// ```
/// use figure_mesh::core::vec3::{norm, point};
/// assert_eq!(norm(point(3.0, 4.0, 0.0)), 5.0);
/// ```
#[inline]
pub fn norm(v: Point) -> f64 {
    v.length()
}

/// Distance between two points.
///
/// # Examples
/// ```
/// use figure_mesh::core::vec3::{dist, point};
/// assert_eq!(dist(point(1.0, 1.0, 1.0), point(1.0, 1.0, 3.0)), 2.0);
/// ```
#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    norm(b - a)
}

/// Scales a vector to unit length.
///
/// Fails with [`MeshError::InvalidGeometry`] when the norm is zero or not
/// finite. Arbitrarily short vectors are accepted.
///
/// # Examples
/// ```
/// use figure_mesh::core::vec3::{normalize, point};
/// let n = normalize(point(0.0, 0.0, 2.0)).unwrap();
/// assert_eq!(n, point(0.0, 0.0, 1.0));
/// assert!(normalize(point(0.0, 0.0, 0.0)).is_err());
/// ```
pub fn normalize(v: Point) -> MeshResult<Point> {
    let length = norm(v);
    if !length.is_finite() || length == 0.0 {
        return Err(MeshError::invalid_geometry(format!(
            "cannot normalize vector of length {length}: ({}, {}, {})",
            v.x, v.y, v.z
        )));
    }
    Ok(v / length)
}

/// Point on a horizontal ring of the given radius around the Y axis.
///
/// Angles are measured from +Z toward +X, the convention every revolution
/// surface in this crate uses.
///
/// # Examples
/// ```
/// use figure_mesh::core::vec3::{ring_point, point};
/// let p = ring_point(2.0, 0.0, 5.0);
/// assert_eq!(p, point(0.0, 5.0, 2.0));
/// ```
#[inline]
pub fn ring_point(radius: f64, angle: f64, y: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(radius * sin, y, radius * cos)
}
