//! # Figure Mesh
//!
//! Procedural triangle meshes for analytic primitives and bicubic Bezier
//! patches.
//!
//! ## Architecture
//!
//! ```text
//! shape descriptor (Cone, Sphere, BezierSurface, ...) → generator → TriangleMesh
//! ```
//!
//! ## Generators
//!
//! - **Planar**: triangle, rectangle, box (subdivided quads)
//! - **Revolution**: cone, cylinder, sphere (slices x stacks)
//! - **Patches**: Bezier surfaces evaluated in power form
//!
//! Output is an ordered, unindexed triangle list. The sphere also carries a
//! normals section that mirrors its positions.
//!
//! ## Usage
//!
//! ```rust
//! use figure_mesh::{primitives, Cylinder};
//!
//! let mesh = primitives::cylinder(&Cylinder::new(1.0, 2.0, 16, 4))?;
//! assert_eq!(mesh.triangle_count(), 16 * (2 + 2 * 4));
//! # Ok::<(), figure_mesh::MeshError>(())
//! ```

pub mod core;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use crate::core::{
    BezierSurface, Cone, Cuboid, Cylinder, Matrix4, PatchIndices, Point, Rectangle, Sphere,
    Triangle,
};
pub use error::{MeshError, MeshResult};
pub use mesh::{ShapeKind, TriangleMesh};
