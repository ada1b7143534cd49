//! # Error Types
//!
//! Error types for mesh generation. All errors are explicit and carry enough
//! context to identify the offending parameter.
//!
//! ## Error Policy
//!
//! - Degenerate parameters are rejected before any triangle is produced
//! - No NaN or infinite coordinates are ever emitted silently
//! - A generator either returns a complete mesh or an error

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during mesh generation.
///
/// ## Example
///
/// ```rust
/// use figure_mesh::{primitives, Sphere, MeshError};
///
/// match primitives::sphere(&Sphere::new(1.0, 2, 4)) {
///     Ok(mesh) => println!("{} triangles", mesh.triangle_count()),
///     Err(MeshError::InvalidGeometry { message }) => eprintln!("rejected: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Degenerate shape parameters.
    ///
    /// Zero division counts, too few slices, non-positive radii, zero-length
    /// edges, or a zero-length vector passed to normalize.
    #[error("Invalid geometry parameters: {message}")]
    InvalidGeometry {
        /// What was wrong with the parameters
        message: String,
    },

    /// Externally supplied data that is structurally inconsistent.
    ///
    /// Raised for Bezier patches referencing control points that do not exist.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// What was wrong with the input
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh generation.
///
/// ## Example
///
/// ```rust
/// use figure_mesh::error::MeshResult;
/// use figure_mesh::{primitives, Rectangle, TriangleMesh};
///
/// fn floor() -> MeshResult<TriangleMesh> {
///     primitives::rectangle(&Rectangle::from_width_depth(4.0, 4.0), 2)
/// }
/// assert_eq!(floor().unwrap().triangle_count(), 8);
/// ```
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_geometry("slices must be at least 3: 2");
        assert!(err.to_string().contains("Invalid geometry"));
        assert!(err.to_string().contains("slices"));

        let err = MeshError::malformed("patch 0 references control point 99");
        assert!(err.to_string().contains("Malformed input"));
        assert!(err.to_string().contains("99"));
    }

    /// Errors must cross thread boundaries for callers that batch generation.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
