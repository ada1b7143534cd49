//! # Sphere Primitive
//!
//! Generates a sphere centered on the origin from a latitude/longitude grid,
//! together with a normals section that mirrors the positions.

use std::f64::consts::PI;

use tracing::debug;

use super::{check_positive, check_resolution};
use crate::core::shapes::{Sphere, Triangle};
use crate::core::vec3::{normalize, Point};
use crate::error::MeshResult;
use crate::mesh::{ShapeKind, TriangleMesh};

/// Creates a sphere mesh with per-vertex normals.
///
/// # Algorithm
///
/// - A `(stacks + 1) x (slices + 1)` grid is sampled row by row, latitude
///   `π·i/stacks` outer, longitude `2π·j/slices` inner:
///   `x = r·cos(lon)·sin(lat)`, `y = r·cos(lat)`, `z = r·sin(lon)·sin(lat)`.
///   The first and last column coincide so the seam closes.
/// - A flat index `k` walks `0..slices·stacks + slices`. Each step emits
///   `(v[k], v[k+slices+1], v[k+slices])` and `(v[k+slices+1], v[k], v[k+1])`,
///   which relies on the grid rows being `slices + 1` wide.
/// - The normals section repeats the same walk over the unit normals.
///
/// Emits `2 * (slices * stacks + slices)` triangles in each section.
///
/// When `slices > stacks` the walk reaches past the last grid row; those
/// lookups resolve to the final grid vertex, which is the south pole, so the
/// extra triangles collapse onto it.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{primitives::sphere, Sphere};
///
/// let mesh = sphere(&Sphere::new(1.0, 8, 4)).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * (8 * 4 + 8));
/// assert_eq!(mesh.normals().unwrap().len(), mesh.triangle_count());
/// ```
pub fn sphere(shape: &Sphere) -> MeshResult<TriangleMesh> {
    check_positive("sphere radius", shape.radius)?;
    check_resolution("sphere", shape.slices, shape.stacks)?;

    let (verts, normals) = sample_grid(shape)?;

    let slices = shape.slices as usize;
    let len = slices * shape.stacks as usize + slices;

    let mut mesh = TriangleMesh::with_capacity(ShapeKind::Sphere, 2 * len);
    for triangle in walk(&verts, slices, len) {
        mesh.push(triangle);
    }
    mesh.set_normals(walk(&normals, slices, len).collect());

    debug!(
        slices = shape.slices,
        stacks = shape.stacks,
        triangles = mesh.triangle_count(),
        "generated sphere"
    );
    Ok(mesh)
}

/// Samples positions and unit normals on the latitude/longitude grid.
fn sample_grid(shape: &Sphere) -> MeshResult<(Vec<Point>, Vec<Point>)> {
    let count = (shape.slices as usize + 1) * (shape.stacks as usize + 1);
    let mut verts = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    for i in 0..=shape.stacks {
        let lat = f64::from(i) / f64::from(shape.stacks) * PI;
        let (slat, clat) = lat.sin_cos();

        for j in 0..=shape.slices {
            let lon = f64::from(j) / f64::from(shape.slices) * 2.0 * PI;
            let (slon, clon) = lon.sin_cos();

            let p = Point::new(
                shape.radius * clon * slat,
                shape.radius * clat,
                shape.radius * slon * slat,
            );
            verts.push(p);
            normals.push(normalize(p)?);
        }
    }

    Ok((verts, normals))
}

/// The two-triangles-per-index walk shared by both sections.
fn walk(grid: &[Point], slices: usize, len: usize) -> impl Iterator<Item = Triangle> + '_ {
    let last = grid.len() - 1;
    let at = move |k: usize| grid[k.min(last)];

    (0..len).flat_map(move |k| {
        let p1 = at(k);
        let p2 = at(k + slices + 1);
        let p3 = at(k + slices);
        let p4 = at(k + 1);
        [Triangle::new(p1, p2, p3), Triangle::new(p2, p1, p4)]
    })
}
