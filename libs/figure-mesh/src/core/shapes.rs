//! Shape descriptors consumed by the generators.
//!
//! All descriptors are plain values. Generators borrow them and never
//! mutate them; validation happens in the generator that consumes them.

use config::constants::BEZIER_PATCH_SIZE;

use super::vec3::Point;
use crate::error::{MeshError, MeshResult};

/// An ordered triple of points. The order fixes the front-face winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner
    pub p1: Point,
    /// Second corner
    pub p2: Point,
    /// Third corner
    pub p3: Point,
}

impl Triangle {
    /// Creates a triangle from three corners.
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the corners in winding order.
    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Unnormalized face normal following the right-hand rule.
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::{Point, Triangle};
    ///
    /// let t = Triangle::new(Point::ZERO, Point::X, Point::Y);
    /// assert_eq!(t.face_normal(), Point::Z);
    /// ```
    pub fn face_normal(&self) -> Point {
        (self.p2 - self.p1).cross(self.p3 - self.p1)
    }
}

/// A planar quadrilateral.
///
/// ```text
/// P1 ------- P3
/// |           |
/// |           |
/// P2 ------- P4
/// ```
///
/// P1–P2 and P3–P4 are parallel edges, as are P1–P3 and P2–P4. Coplanarity
/// is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Corner shared by both reference edges
    pub p1: Point,
    /// End of the P1 "height" edge
    pub p2: Point,
    /// End of the P1 "width" edge
    pub p3: Point,
    /// Corner opposite P1
    pub p4: Point,
}

impl Rectangle {
    /// Creates a rectangle from its four corners.
    pub const fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Rectangle in the XZ plane centered at the origin, facing +Y.
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::{Point, Rectangle};
    ///
    /// let r = Rectangle::from_width_depth(2.0, 4.0);
    /// assert_eq!(r.p1, Point::new(-1.0, 0.0, -2.0));
    /// assert_eq!(r.p4, Point::new(1.0, 0.0, 2.0));
    /// ```
    pub fn from_width_depth(width: f64, depth: f64) -> Self {
        Self::at_height(width / 2.0, 0.0, depth / 2.0)
    }

    fn at_height(half_width: f64, y: f64, half_depth: f64) -> Self {
        Self::new(
            Point::new(-half_width, y, -half_depth),
            Point::new(-half_width, y, half_depth),
            Point::new(half_width, y, -half_depth),
            Point::new(half_width, y, half_depth),
        )
    }

    /// Splits the quad along the P2–P3 diagonal into `(P1, P2, P3)` and
    /// `(P3, P2, P4)`.
    ///
    /// Every quad in this crate goes through this split, which keeps the
    /// winding identical across planar, revolution and Bezier surfaces.
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::Rectangle;
    ///
    /// let r = Rectangle::from_width_depth(1.0, 1.0);
    /// let [a, b] = r.split();
    /// assert_eq!(a.p3, b.p1);
    /// assert_eq!(a.p2, b.p2);
    /// ```
    #[inline]
    pub fn split(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.p1, self.p2, self.p3),
            Triangle::new(self.p3, self.p2, self.p4),
        ]
    }

    /// Returns the corners in declaration order.
    pub fn corners(&self) -> [Point; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }
}

/// A box described by two parallel rectangles.
///
/// Corresponding corners are vertically aligned: `top.p1` above
/// `bottom.p1`, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// Upper face
    pub top: Rectangle,
    /// Lower face
    pub bottom: Rectangle,
}

impl Cuboid {
    /// Creates a box from its top and bottom faces.
    pub const fn new(top: Rectangle, bottom: Rectangle) -> Self {
        Self { top, bottom }
    }

    /// Axis-aligned box centered at the origin.
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::Cuboid;
    ///
    /// let b = Cuboid::from_whd(2.0, 4.0, 6.0);
    /// assert_eq!(b.top.p1.y, 2.0);
    /// assert_eq!(b.bottom.p4.z, 3.0);
    /// ```
    pub fn from_whd(width: f64, height: f64, depth: f64) -> Self {
        let (w, h, d) = (width / 2.0, height / 2.0, depth / 2.0);
        Self::new(Rectangle::at_height(w, h, d), Rectangle::at_height(w, -h, d))
    }
}

/// A cone standing on the XZ plane with its apex on +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    /// Base radius
    pub radius: f64,
    /// Apex height
    pub height: f64,
    /// Angular subdivisions (at least 3)
    pub slices: u32,
    /// Axial subdivisions (at least 1)
    pub stacks: u32,
}

impl Cone {
    /// Creates a cone descriptor.
    pub const fn new(radius: f64, height: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            height,
            slices,
            stacks,
        }
    }
}

/// A cylinder centered on the origin with its axis along Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Radius of both caps
    pub radius: f64,
    /// Total height
    pub height: f64,
    /// Angular subdivisions (at least 3)
    pub slices: u32,
    /// Axial subdivisions (at least 1)
    pub stacks: u32,
}

impl Cylinder {
    /// Creates a cylinder descriptor.
    pub const fn new(radius: f64, height: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            height,
            slices,
            stacks,
        }
    }
}

/// A sphere centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Radius
    pub radius: f64,
    /// Longitude divisions (at least 3)
    pub slices: u32,
    /// Latitude divisions (at least 1)
    pub stacks: u32,
}

impl Sphere {
    /// Creates a sphere descriptor.
    pub const fn new(radius: f64, slices: u32, stacks: u32) -> Self {
        Self {
            radius,
            slices,
            stacks,
        }
    }
}

/// Control point indices of one bicubic patch, row-major 4x4.
pub type PatchIndices = [u32; BEZIER_PATCH_SIZE];

/// A set of bicubic Bezier patches sharing one control point list.
///
/// Construction checks that every patch index refers to an existing
/// control point, so generators can index without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSurface {
    control_points: Vec<Point>,
    patches: Vec<PatchIndices>,
}

impl BezierSurface {
    /// Creates a surface, rejecting out-of-range patch indices.
    ///
    /// # Examples
    /// ```
    /// use figure_mesh::{BezierSurface, Point};
    ///
    /// let ok = BezierSurface::new(vec![Point::ZERO; 16], vec![std::array::from_fn(|i| i as u32)]);
    /// assert!(ok.is_ok());
    ///
    /// let bad = BezierSurface::new(vec![Point::ZERO; 4], vec![[7; 16]]);
    /// assert!(bad.is_err());
    /// ```
    pub fn new(control_points: Vec<Point>, patches: Vec<PatchIndices>) -> MeshResult<Self> {
        let count = control_points.len();
        for (p, patch) in patches.iter().enumerate() {
            if let Some(&idx) = patch.iter().find(|&&idx| idx as usize >= count) {
                return Err(MeshError::malformed(format!(
                    "patch {p} references control point {idx}, but only {count} exist"
                )));
            }
        }
        Ok(Self {
            control_points,
            patches,
        })
    }

    /// Returns the control points.
    #[inline]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Returns the patches.
    #[inline]
    pub fn patches(&self) -> &[PatchIndices] {
        &self.patches
    }

    /// Resolves one patch's indices into its control points.
    pub(crate) fn patch_points(&self, patch: &PatchIndices) -> [Point; BEZIER_PATCH_SIZE] {
        std::array::from_fn(|k| self.control_points[patch[k] as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_shares_diagonal() {
        let r = Rectangle::from_width_depth(2.0, 2.0);
        let [a, b] = r.split();
        assert_eq!(a, Triangle::new(r.p1, r.p2, r.p3));
        assert_eq!(b, Triangle::new(r.p3, r.p2, r.p4));
    }

    #[test]
    fn test_from_width_depth_faces_up() {
        let r = Rectangle::from_width_depth(2.0, 2.0);
        for t in r.split() {
            assert!(t.face_normal().y > 0.0);
        }
    }

    #[test]
    fn test_from_whd_corners_align() {
        let b = Cuboid::from_whd(2.0, 2.0, 2.0);
        for (top, bottom) in b.top.corners().iter().zip(b.bottom.corners()) {
            assert_eq!(top.x, bottom.x);
            assert_eq!(top.z, bottom.z);
            assert_eq!(top.y - bottom.y, 2.0);
        }
    }

    #[test]
    fn test_bezier_surface_rejects_out_of_range_index() {
        let mut patch: PatchIndices = [0; 16];
        patch[15] = 16;
        let err = BezierSurface::new(vec![Point::ZERO; 16], vec![patch]).unwrap_err();
        assert!(matches!(err, MeshError::MalformedInput { .. }));
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_bezier_surface_resolves_patch_points() {
        let points: Vec<Point> = (0..16).map(|i| Point::new(i as f64, 0.0, 0.0)).collect();
        let mut patch: PatchIndices = std::array::from_fn(|i| i as u32);
        patch.reverse();
        let surface = BezierSurface::new(points, vec![patch]).unwrap();
        let resolved = surface.patch_points(&surface.patches()[0]);
        assert_eq!(resolved[0].x, 15.0);
        assert_eq!(resolved[15].x, 0.0);
    }
}
