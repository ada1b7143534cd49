//! Core value types: vectors, fixed-size matrices and shape descriptors.

pub mod matrix;
pub mod shapes;
pub mod vec3;

pub use matrix::Matrix4;
pub use shapes::{
    BezierSurface, Cone, Cuboid, Cylinder, PatchIndices, Rectangle, Sphere, Triangle,
};
pub use vec3::Point;
