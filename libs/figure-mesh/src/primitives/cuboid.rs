//! # Box Primitive
//!
//! A box is six rectangles, each handed to the planar subdivider with the
//! same division count.

use tracing::debug;

use super::planar::{cell_triangles, subdivide_into};
use crate::core::shapes::{Cuboid, Rectangle};
use crate::error::MeshResult;
use crate::mesh::{ShapeKind, TriangleMesh};

/// Generates a box mesh.
///
/// With top corners `p1..p4` and bottom corners `p5..p8` the faces are
/// emitted in this order, each paired so that its normal points outward:
///
/// | face        | corners            |
/// |-------------|--------------------|
/// | back left   | `p1, p5, p2, p6`   |
/// | back right  | `p3, p7, p1, p5`   |
/// | base        | `p7, p8, p5, p6`   |
/// | front left  | `p2, p6, p4, p8`   |
/// | front right | `p4, p8, p3, p7`   |
/// | top         | `p1, p2, p3, p4`   |
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::cuboid, Cuboid};
///
/// let mesh = cuboid(&Cuboid::from_whd(2.0, 2.0, 2.0), 1).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cuboid(shape: &Cuboid, divisions: u32) -> MeshResult<TriangleMesh> {
    let faces = faces(shape);
    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Box, faces.len() * cell_triangles(divisions));
    for face in &faces {
        subdivide_into(&mut mesh, face, divisions)?;
    }

    debug!(
        divisions,
        triangles = mesh.triangle_count(),
        "generated box"
    );
    Ok(mesh)
}

/// The six faces of a box in emission order.
fn faces(shape: &Cuboid) -> [Rectangle; 6] {
    let Rectangle { p1, p2, p3, p4 } = shape.top;
    let Rectangle {
        p1: p5,
        p2: p6,
        p3: p7,
        p4: p8,
    } = shape.bottom;

    [
        Rectangle::new(p1, p5, p2, p6),
        Rectangle::new(p3, p7, p1, p5),
        Rectangle::new(p7, p8, p5, p6),
        Rectangle::new(p2, p6, p4, p8),
        Rectangle::new(p4, p8, p3, p7),
        shape.top,
    ]
}
