//! # Planar Subdivider
//!
//! Splits one quadrilateral into an `n x n` grid of cells, two triangles
//! per cell. Rectangles and box faces are built from it.
//!
//! ```text
//! P1 ---- · ---- P3      i walks P1 → P3 (outer loop)
//! |  c11  |  c21  |      j walks P1 → P2 (inner loop)
//! · ----- · ----- ·
//! |  c12  |  c22  |
//! P2 ---- · ---- P4
//! ```

use config::constants::MIN_DIVISIONS;

use crate::core::shapes::{Rectangle, Triangle};
use crate::core::vec3::{dist, normalize};
use crate::error::{MeshError, MeshResult};
use crate::mesh::{ShapeKind, TriangleMesh};

/// Appends the subdivision of `quad` to `mesh`.
///
/// Cells are emitted row-major (i outer, j inner); each cell goes through
/// [`Rectangle::split`]. Exactly `2 * divisions²` triangles are appended.
///
/// # Errors
///
/// Returns [`MeshError::InvalidGeometry`] when `divisions` is zero or when
/// either reference edge (P1–P3, P1–P2) has zero length. Nothing is
/// appended in that case.
pub fn subdivide_into(mesh: &mut TriangleMesh, quad: &Rectangle, divisions: u32) -> MeshResult<()> {
    if divisions < MIN_DIVISIONS {
        return Err(MeshError::invalid_geometry(format!(
            "division count must be at least {MIN_DIVISIONS}: {divisions}"
        )));
    }

    let vw = normalize(quad.p3 - quad.p1)?;
    let vh = normalize(quad.p2 - quad.p1)?;
    let n = f64::from(divisions);
    let w = dist(quad.p3, quad.p1) / n;
    let h = dist(quad.p2, quad.p1) / n;

    let corner = |i: u32, j: u32| quad.p1 + (f64::from(i) * w) * vw + (f64::from(j) * h) * vh;

    for i in 1..=divisions {
        for j in 1..=divisions {
            let cell = Rectangle::new(
                corner(i - 1, j - 1),
                corner(i - 1, j),
                corner(i, j - 1),
                corner(i, j),
            );
            mesh.push_quad(&cell);
        }
    }

    Ok(())
}

/// Subdivides a single quadrilateral and returns the triangles.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::planar::subdivide, Rectangle};
///
/// let triangles = subdivide(&Rectangle::from_width_depth(2.0, 2.0), 3).unwrap();
/// assert_eq!(triangles.len(), 18);
/// ```
pub fn subdivide(quad: &Rectangle, divisions: u32) -> MeshResult<Vec<Triangle>> {
    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Rectangle, cell_triangles(divisions));
    subdivide_into(&mut mesh, quad, divisions)?;
    Ok(mesh.triangles().to_vec())
}

/// Triangles emitted for one quad at the given division count.
#[inline]
pub(crate) fn cell_triangles(divisions: u32) -> usize {
    let n = divisions as usize;
    2 * n * n
}
