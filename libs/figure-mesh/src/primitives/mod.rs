//! # Primitive Generators
//!
//! One pure function per shape. Each takes a borrowed descriptor, validates
//! it, and returns a fresh [`TriangleMesh`].
//!
//! ## Winding
//!
//! Every quad in every generator is split by [`Rectangle::split`], so the
//! front face of each triangle is the one seen counter-clockwise under the
//! right-hand rule. Closed shapes face outward.
//!
//! ## Validation
//!
//! Lengths must be finite and strictly positive, revolution surfaces need at
//! least [`MIN_SLICES`] slices and [`MIN_STACKS`] stack, and division and
//! tessellation counts must be at least one.

pub mod bezier;
pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod planar;
pub mod sphere;

pub use bezier::bezier;
pub use cone::cone;
pub use cuboid::cuboid;
pub use cylinder::cylinder;
pub use sphere::sphere;

use config::constants::{MIN_SLICES, MIN_STACKS};
use tracing::debug;

use crate::core::shapes::{Rectangle, Triangle};
use crate::error::{MeshError, MeshResult};
use crate::mesh::{ShapeKind, TriangleMesh};

/// Wraps a single triangle as a mesh. Always succeeds.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::triangle, Point, Triangle};
///
/// let mesh = triangle(&Triangle::new(Point::ZERO, Point::X, Point::Y));
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
pub fn triangle(shape: &Triangle) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Triangle, 1);
    mesh.push(*shape);
    mesh
}

/// Subdivides a rectangle into `2 * divisions²` triangles.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] for a zero division count or a rectangle
/// with a zero-length reference edge.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::rectangle, Rectangle};
///
/// let mesh = rectangle(&Rectangle::from_width_depth(2.0, 2.0), 1).unwrap();
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn rectangle(shape: &Rectangle, divisions: u32) -> MeshResult<TriangleMesh> {
    let mut mesh =
        TriangleMesh::with_capacity(ShapeKind::Rectangle, planar::cell_triangles(divisions));
    planar::subdivide_into(&mut mesh, shape, divisions)?;

    debug!(
        divisions,
        triangles = mesh.triangle_count(),
        "generated rectangle"
    );
    Ok(mesh)
}

/// Rejects lengths that are not finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::invalid_geometry(format!(
            "{name} must be finite and positive: {value}"
        )));
    }
    Ok(())
}

/// Rejects revolution resolutions below the minimum slice and stack counts.
pub(crate) fn check_resolution(name: &str, slices: u32, stacks: u32) -> MeshResult<()> {
    if slices < MIN_SLICES {
        return Err(MeshError::invalid_geometry(format!(
            "{name} needs at least {MIN_SLICES} slices: {slices}"
        )));
    }
    if stacks < MIN_STACKS {
        return Err(MeshError::invalid_geometry(format!(
            "{name} needs at least {MIN_STACKS} stacks: {stacks}"
        )));
    }
    Ok(())
}
