//! # Bezier Patch Tessellation
//!
//! Evaluates bicubic Bezier patches on a regular parameter grid and
//! triangulates the result with the planar quad split.

use config::constants::MIN_TESSELLATION;
use tracing::debug;

use crate::core::matrix::{cubic_powers, Matrix4};
use crate::core::shapes::{BezierSurface, PatchIndices, Rectangle};
use crate::core::vec3::Point;
use crate::error::{MeshError, MeshResult};
use crate::mesh::{ShapeKind, TriangleMesh};

/// Cubic Bezier basis in power form. Symmetric, so `M = Mᵗ`.
pub const BEZIER_BASIS: Matrix4<f64> = Matrix4::from_rows([
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
]);

/// Tessellates every patch of `surface`.
///
/// Each patch is sampled on a `(4t) x (4t)` grid of cells where `t` is
/// `tessellation`. Cell `(i, j)` spans `u ∈ [(i-1)/4t, i/4t]` and
/// `v ∈ [(j-1)/4t, j/4t]` and is emitted as the quad
/// `(S(u, v₀), S(u, v₁), S(u₀, v₀), S(u₀, v₁))` split with
/// [`Rectangle::split`].
///
/// Emits `2 * (4t)²` triangles per patch.
///
/// # Errors
///
/// [`MeshError::InvalidGeometry`] when `tessellation` is zero.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::bezier, BezierSurface, Point};
///
/// let points: Vec<Point> = (0..16)
///     .map(|k| Point::new((k % 4) as f64, 0.0, (k / 4) as f64))
///     .collect();
/// let surface = BezierSurface::new(points, vec![std::array::from_fn(|k| k as u32)]).unwrap();
/// let mesh = bezier(&surface, 1).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 4 * 4);
/// ```
pub fn bezier(surface: &BezierSurface, tessellation: u32) -> MeshResult<TriangleMesh> {
    if tessellation < MIN_TESSELLATION {
        return Err(MeshError::invalid_geometry(format!(
            "tessellation must be at least {MIN_TESSELLATION}: {tessellation}"
        )));
    }

    let cells = 4 * tessellation as usize;
    let mut mesh = TriangleMesh::with_capacity(
        ShapeKind::Bezier,
        surface.patches().len() * 2 * cells * cells,
    );

    for patch in surface.patches() {
        tessellate_patch(&mut mesh, &coefficients(surface, patch), tessellation);
    }

    debug!(
        patches = surface.patches().len(),
        control_points = surface.control_points().len(),
        tessellation,
        triangles = mesh.triangle_count(),
        "generated bezier surface"
    );
    Ok(mesh)
}

/// Polynomial coefficients `M · P · Mᵗ` of one patch.
fn coefficients(surface: &BezierSurface, patch: &PatchIndices) -> Matrix4<Point> {
    let points = surface.patch_points(patch);
    Matrix4::from_fn(|i, j| points[i * 4 + j]).blend(&BEZIER_BASIS)
}

/// Evaluates a patch from its coefficient matrix.
///
/// `u` weights the columns of each row and `v` weights the resulting rows.
///
/// # Example
///
/// ```rust
/// use figure_mesh::core::matrix::Matrix4;
/// use figure_mesh::primitives::bezier::{evaluate, BEZIER_BASIS};
/// use figure_mesh::Point;
///
/// let flat = Matrix4::from_fn(|_, _| Point::new(1.0, 2.0, 3.0)).blend(&BEZIER_BASIS);
/// let p = evaluate(&flat, 0.25, 0.75);
/// assert!((p - Point::new(1.0, 2.0, 3.0)).length() < 1e-12);
/// ```
pub fn evaluate(coefficients: &Matrix4<Point>, u: f64, v: f64) -> Point {
    coefficients.weighted_sum(cubic_powers(v), cubic_powers(u))
}

fn tessellate_patch(mesh: &mut TriangleMesh, mpm: &Matrix4<Point>, tessellation: u32) {
    let steps = 4 * tessellation;
    let scale = f64::from(steps);

    for i in 1..=steps {
        let u0 = f64::from(i - 1) / scale;
        let u1 = f64::from(i) / scale;

        for j in 1..=steps {
            let v0 = f64::from(j - 1) / scale;
            let v1 = f64::from(j) / scale;

            mesh.push_quad(&Rectangle::new(
                evaluate(mpm, u1, v0),
                evaluate(mpm, u1, v1),
                evaluate(mpm, u0, v0),
                evaluate(mpm, u0, v1),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn identity_patch() -> PatchIndices {
        std::array::from_fn(|k| k as u32)
    }

    /// Control points on the plane y = 0 laid out as a 3x3 square.
    fn flat_surface() -> BezierSurface {
        let points = (0..16)
            .map(|k| Point::new((k % 4) as f64, 0.0, (k / 4) as f64))
            .collect();
        BezierSurface::new(points, vec![identity_patch()]).unwrap()
    }

    #[test]
    fn test_origin_patch_collapses_to_origin() {
        let surface = BezierSurface::new(vec![Point::ZERO; 16], vec![identity_patch()]).unwrap();
        for t in 1..=3 {
            let mesh = bezier(&surface, t).unwrap();
            assert!(mesh.positions().all(|p| p == Point::ZERO));
        }
    }

    #[test]
    fn test_triangle_count_per_patch() {
        let mut surface = flat_surface();
        let mesh = bezier(&surface, 2).unwrap();
        assert_eq!(mesh.triangle_count(), 2 * 8 * 8);

        surface = BezierSurface::new(
            surface.control_points().to_vec(),
            vec![identity_patch(), identity_patch(), identity_patch()],
        )
        .unwrap();
        assert_eq!(bezier(&surface, 1).unwrap().triangle_count(), 3 * 2 * 4 * 4);
    }

    #[test]
    fn test_corners_interpolate_control_points() {
        let surface = flat_surface();
        let mpm = coefficients(&surface, &surface.patches()[0]);
        let cps = surface.control_points();
        // u runs along a row (columns 0..3), v runs across rows.
        let cases = [
            ((0.0, 0.0), cps[0]),
            ((1.0, 0.0), cps[3]),
            ((0.0, 1.0), cps[12]),
            ((1.0, 1.0), cps[15]),
        ];
        for ((u, v), expected) in cases {
            let p = evaluate(&mpm, u, v);
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
            assert_relative_eq!(p.z, expected.z, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_evenly_spaced_controls_give_linear_surface() {
        let surface = flat_surface();
        let mpm = coefficients(&surface, &surface.patches()[0]);
        let p = evaluate(&mpm, 0.5, 0.25);
        assert_relative_eq!(p.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_patch_stays_in_plane_and_bounds() {
        let mesh = bezier(&flat_surface(), 2).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 3.0, epsilon = 1e-12);
        assert!(mesh.positions().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_winding_is_consistent_across_cells() {
        let mesh = bezier(&flat_surface(), 1).unwrap();
        let reference = mesh.triangles()[0].face_normal().y.signum();
        for t in mesh.triangles() {
            assert_eq!(t.face_normal().y.signum(), reference);
        }
    }

    #[test]
    fn test_rejects_zero_tessellation() {
        let err = bezier(&flat_surface(), 0).unwrap_err();
        assert!(matches!(err, MeshError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_basis_is_symmetric() {
        assert_eq!(BEZIER_BASIS, BEZIER_BASIS.transpose());
    }
}
