//! # Configuration Constants
//!
//! Centralized constants for the figure generator. Tessellation limits,
//! the text round-trip tolerance, and output formatting values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Tolerance for values read back from text
//! - **Tessellation**: Minimum subdivision counts accepted by the generators
//! - **Output**: Text format parameters shared by the writer and the CLI

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when comparing values that went through the six decimal
/// text format.
///
/// # Example
///
/// ```rust
/// use config::constants::TEXT_ROUNDTRIP_TOLERANCE;
///
/// let written: f64 = "0.333333".parse().unwrap();
/// assert!((written - 1.0 / 3.0).abs() < TEXT_ROUNDTRIP_TOLERANCE);
/// ```
pub const TEXT_ROUNDTRIP_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of angular subdivisions for revolution surfaces.
///
/// Fewer than three slices cannot enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SLICES;
///
/// let requested = 2;
/// assert!(requested < MIN_SLICES);
/// ```
pub const MIN_SLICES: u32 = 3;

/// Minimum number of axial (or latitude) subdivisions for revolution surfaces.
pub const MIN_STACKS: u32 = 1;

/// Minimum grid resolution accepted by the planar subdivider.
///
/// A division count of zero has no well-defined subdivision and is rejected.
pub const MIN_DIVISIONS: u32 = 1;

/// Minimum Bezier tessellation level. Each patch is sampled on a
/// `(4 * tessellation) x (4 * tessellation)` grid.
pub const MIN_TESSELLATION: u32 = 1;

/// Default division count used when the caller does not specify one.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_DIVISIONS, MIN_DIVISIONS};
///
/// let user: Option<u32> = None;
/// assert!(user.unwrap_or(DEFAULT_DIVISIONS) >= MIN_DIVISIONS);
/// ```
pub const DEFAULT_DIVISIONS: u32 = 1;

/// Number of control point indices referenced by one bicubic patch.
pub const BEZIER_PATCH_SIZE: usize = 16;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Decimal places written for every coordinate in the mesh text format.
///
/// # Example
///
/// ```rust
/// use config::constants::OUTPUT_PRECISION;
///
/// let line = format!("{:.*}", OUTPUT_PRECISION, 0.5);
/// assert_eq!(line, "0.500000");
/// ```
pub const OUTPUT_PRECISION: usize = 6;

/// Largest precision the writer accepts. Beyond this, f64 output only adds
/// noise digits.
pub const MAX_OUTPUT_PRECISION: usize = 17;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of configuration settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.precision, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Decimal places used when writing coordinates.
    pub precision: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// precision.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(8).expect("valid config");
    /// assert_eq!(cfg.precision, 8);
    /// assert!(GlobalConfig::new(40).is_err());
    /// ```
    pub fn new(precision: usize) -> Result<Self, ConfigError> {
        if precision > MAX_OUTPUT_PRECISION {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        Ok(Self { precision })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            precision: OUTPUT_PRECISION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the requested precision exceeds [`MAX_OUTPUT_PRECISION`].
    InvalidPrecision(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(f, "precision must be <= {MAX_OUTPUT_PRECISION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
