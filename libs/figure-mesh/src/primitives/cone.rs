//! # Cone Primitive
//!
//! Generates a cone standing on the XZ plane with its apex at `(0, h, 0)`.
//!
//! ```text
//!        ^  apex (0, h, 0)
//!       /|\
//!      /-+-\    <- tip ring: radius r/stacks, height h(stacks-1)/stacks
//!     /  |  \
//!    /---+---\  <- ring j: radius r(stacks-j)/stacks, height hj/stacks
//!   /    |    \
//!  ------+------
//!        r
//! ```
//!
//! The lateral surface is a stack of frustum bands whose radius shrinks by
//! `r/stacks` per band. The topmost band is closed by a fan to the apex.

use std::f64::consts::PI;

use tracing::debug;

use super::{check_positive, check_resolution};
use crate::core::shapes::{Cone, Rectangle, Triangle};
use crate::core::vec3::{ring_point, Point};
use crate::error::MeshResult;
use crate::mesh::{ShapeKind, TriangleMesh};

/// Creates a cone mesh.
///
/// Per slice the output holds, in order:
/// 1. the tip triangle from the apex to the tip ring,
/// 2. the base-cap triangle `(ring_i, origin, ring_i+1)`,
/// 3. `stacks - 1` side quads from the base upward, band `j` spanning
///    radii `r(stacks-j)/stacks` → `r(stacks-j-1)/stacks` and heights
///    `hj/stacks` → `h(j+1)/stacks`.
///
/// Emits `2 * slices * stacks` triangles.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::cone, Cone};
///
/// let mesh = cone(&Cone::new(1.0, 2.0, 8, 3)).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 3);
/// ```
pub fn cone(shape: &Cone) -> MeshResult<TriangleMesh> {
    check_positive("cone radius", shape.radius)?;
    check_positive("cone height", shape.height)?;
    check_resolution("cone", shape.slices, shape.stacks)?;

    let slices = shape.slices as usize;
    let stacks = shape.stacks as usize;
    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Cone, 2 * slices * stacks);

    let step = 2.0 * PI / f64::from(shape.slices);
    let st = f64::from(shape.stacks);
    let apex = Point::new(0.0, shape.height, 0.0);
    let tip_radius = shape.radius / st;
    let tip_height = shape.height * (st - 1.0) / st;

    for i in 0..shape.slices {
        let theta = f64::from(i) * step;
        let theta_next = f64::from(i + 1) * step;

        mesh.push(Triangle::new(
            apex,
            ring_point(tip_radius, theta, tip_height),
            ring_point(tip_radius, theta_next, tip_height),
        ));

        mesh.push(Triangle::new(
            ring_point(shape.radius, theta, 0.0),
            Point::ZERO,
            ring_point(shape.radius, theta_next, 0.0),
        ));

        for j in 0..shape.stacks - 1 {
            let band = f64::from(j);
            let y = shape.height * band / st;
            let y1 = shape.height * (band + 1.0) / st;
            let r = band_radius(shape.radius, st, band);
            let r1 = band_radius(shape.radius, st, band + 1.0);

            mesh.push_quad(&Rectangle::new(
                ring_point(r1, theta, y1),
                ring_point(r, theta, y),
                ring_point(r1, theta_next, y1),
                ring_point(r, theta_next, y),
            ));
        }
    }

    debug!(
        slices = shape.slices,
        stacks = shape.stacks,
        triangles = mesh.triangle_count(),
        "generated cone"
    );
    Ok(mesh)
}

/// Radius at the bottom of band `j`: a linear fraction `(stacks - j) / stacks`
/// of the base radius.
#[inline]
fn band_radius(radius: f64, stacks: f64, band: f64) -> f64 {
    radius * (stacks - band) / stacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    #[test]
    fn test_cone_triangle_count() {
        for (slices, stacks) in [(3, 1), (4, 2), (16, 8)] {
            let mesh = cone(&Cone::new(1.0, 1.0, slices, stacks)).unwrap();
            assert_eq!(mesh.triangle_count(), (2 * slices * stacks) as usize);
        }
    }

    #[test]
    fn test_single_stack_is_fan_and_base() {
        let mesh = cone(&Cone::new(1.0, 3.0, 4, 1)).unwrap();
        let tip = mesh.triangles()[0];
        assert_eq!(tip.p1, Point::new(0.0, 3.0, 0.0));
        // With one stack the tip ring is the base ring.
        assert_relative_eq!(tip.p2.y, 0.0);
        assert_relative_eq!(tip.p2.z, 1.0);
    }

    #[test]
    fn test_radius_shrinks_linearly_with_height() {
        let (radius, height) = (2.0, 4.0);
        let mesh = cone(&Cone::new(radius, height, 12, 4)).unwrap();
        for p in mesh.positions() {
            let ring = (p.x * p.x + p.z * p.z).sqrt();
            if p.y > 0.0 {
                // Every side and tip vertex sits on the ideal cone surface.
                assert_relative_eq!(ring, radius * (1.0 - p.y / height), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_faces_point_outward() {
        let mesh = cone(&Cone::new(1.0, 2.0, 10, 4)).unwrap();
        for t in mesh.triangles() {
            let n = t.face_normal();
            let centroid = (t.p1 + t.p2 + t.p3) / 3.0;
            if centroid.y.abs() < 1e-12 {
                assert!(n.y < 0.0, "base cap must face down");
            } else {
                let radial = Point::new(centroid.x, 0.0, centroid.z);
                assert!(n.dot(radial) > 0.0, "side must face outward");
                assert!(n.y > 0.0, "side must lean upward");
            }
        }
    }

    #[test]
    fn test_apex_and_base_extent() {
        let mesh = cone(&Cone::new(1.0, 5.0, 8, 3)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.y, 5.0);
        assert_relative_eq!(min.y, 0.0);
        assert_relative_eq!(max.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cone_rejects_bad_parameters() {
        for shape in [
            Cone::new(-1.0, 1.0, 8, 2),
            Cone::new(1.0, 0.0, 8, 2),
            Cone::new(1.0, 1.0, 1, 2),
            Cone::new(1.0, 1.0, 8, 0),
        ] {
            let err = cone(&shape).unwrap_err();
            assert!(matches!(err, MeshError::InvalidGeometry { .. }), "{shape:?}");
        }
    }
}
