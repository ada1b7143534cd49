//! # Mesh Data Structure
//!
//! Flat, unindexed triangle list produced by every generator, with an
//! optional normals section that mirrors the positions index-for-index.

use crate::core::shapes::{Rectangle, Triangle};
use crate::core::vec3::Point;

/// The family of shape a mesh was generated from.
///
/// Serialized as the header line of the mesh text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A single triangle
    Triangle,
    /// A subdivided planar rectangle
    Rectangle,
    /// A box of six subdivided faces
    Box,
    /// A cone with a terraced apex
    Cone,
    /// A capped cylinder
    Cylinder,
    /// A latitude/longitude sphere
    Sphere,
    /// Tessellated Bezier patches
    Bezier,
}

impl ShapeKind {
    /// All kinds, in the order the CLI lists them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Box,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Bezier,
    ];
}

/// A generated triangle soup.
///
/// Vertices are not shared between triangles; the output is meant to be
/// streamed to a renderer as-is.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{Point, ShapeKind, Triangle, TriangleMesh};
///
/// let mut mesh = TriangleMesh::new(ShapeKind::Triangle);
/// mesh.push(Triangle::new(Point::ZERO, Point::X, Point::Y));
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    kind: ShapeKind,
    triangles: Vec<Triangle>,
    /// Per-corner normals, parallel to `triangles`
    normals: Option<Vec<Triangle>>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    pub fn new(kind: ShapeKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(kind: ShapeKind, triangle_count: usize) -> Self {
        Self {
            kind,
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the shape kind.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of emitted vertices (three per triangle).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if no triangle was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends a quad as two triangles using [`Rectangle::split`].
    #[inline]
    pub fn push_quad(&mut self, quad: &Rectangle) {
        self.triangles.extend(quad.split());
    }

    /// Returns the triangles in emission order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Sets the normals section.
    pub(crate) fn set_normals(&mut self, normals: Vec<Triangle>) {
        debug_assert_eq!(normals.len(), self.triangles.len());
        self.normals = Some(normals);
    }

    /// Returns the normals section, if the generator produced one.
    pub fn normals(&self) -> Option<&[Triangle]> {
        self.normals.as_deref()
    }

    /// Iterates over all emitted positions in order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.triangles.iter().flat_map(Triangle::points)
    }

    /// Iterates over all emitted normals in order (empty without normals).
    pub fn normal_vectors(&self) -> impl Iterator<Item = Point> + '_ {
        self.normals
            .iter()
            .flatten()
            .flat_map(Triangle::points)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Point, Point) {
        bounding_box(self.positions())
    }
}

/// Axis-aligned bounding box of a point sequence; `(ZERO, ZERO)` when empty.
///
/// # Example
///
/// ```rust
/// use figure_mesh::{mesh::bounding_box, Point};
///
/// let (min, max) = bounding_box([Point::new(1.0, -2.0, 0.0), Point::new(-1.0, 3.0, 0.5)]);
/// assert_eq!(min, Point::new(-1.0, -2.0, 0.0));
/// assert_eq!(max, Point::new(1.0, 3.0, 0.5));
/// ```
pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> (Point, Point) {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return (Point::ZERO, Point::ZERO);
    };
    points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
}
