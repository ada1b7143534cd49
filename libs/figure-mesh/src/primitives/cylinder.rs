//! # Cylinder Primitive
//!
//! Generates a capped cylinder centered on the origin, axis along Y.

use std::f64::consts::PI;

use tracing::debug;

use super::{check_positive, check_resolution};
use crate::core::shapes::{Cylinder, Rectangle, Triangle};
use crate::core::vec3::{ring_point, Point};
use crate::error::MeshResult;
use crate::mesh::{ShapeKind, TriangleMesh};

/// Creates a cylinder mesh.
///
/// For every slice the output holds, in order: one base-cap triangle
/// `(ring_i, bottom_center, ring_i+1)`, `stacks` side quads from bottom to
/// top, and one top-cap triangle `(top_center, ring_i, ring_i+1)`. The two
/// caps list their corners in opposite orders so both face away from the
/// body.
///
/// Emits `slices * (2 + 2 * stacks)` triangles.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::cylinder, Cylinder};
///
/// let mesh = cylinder(&Cylinder::new(1.0, 2.0, 4, 1)).unwrap();
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn cylinder(shape: &Cylinder) -> MeshResult<TriangleMesh> {
    check_positive("cylinder radius", shape.radius)?;
    check_positive("cylinder height", shape.height)?;
    check_resolution("cylinder", shape.slices, shape.stacks)?;

    let slices = shape.slices as usize;
    let stacks = shape.stacks as usize;
    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Cylinder, slices * (2 + 2 * stacks));

    let step = 2.0 * PI / f64::from(shape.slices);
    let half = shape.height / 2.0;
    let dh = shape.height / f64::from(shape.stacks);
    let bottom_center = Point::new(0.0, -half, 0.0);
    let top_center = Point::new(0.0, half, 0.0);

    for i in 0..shape.slices {
        let theta = f64::from(i) * step;
        let theta_next = f64::from(i + 1) * step;

        let base = ring_point(shape.radius, theta, -half);
        let base_next = ring_point(shape.radius, theta_next, -half);

        mesh.push(Triangle::new(base, bottom_center, base_next));

        for j in 0..shape.stacks {
            let upper = Point::new(0.0, f64::from(j + 1) * dh, 0.0);
            let lower = Point::new(0.0, f64::from(j) * dh, 0.0);
            mesh.push_quad(&Rectangle::new(
                base + upper,
                base + lower,
                base_next + upper,
                base_next + lower,
            ));
        }

        mesh.push(Triangle::new(
            top_center,
            ring_point(shape.radius, theta, half),
            ring_point(shape.radius, theta_next, half),
        ));
    }

    debug!(
        slices = shape.slices,
        stacks = shape.stacks,
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );
    Ok(mesh)
}
