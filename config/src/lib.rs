//! # Config Crate
//!
//! Centralized configuration constants for the figure generator workspace.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, MIN_SLICES, OUTPUT_PRECISION};
//!
//! let slices = 2;
//! let usable = slices.max(MIN_SLICES);
//! assert_eq!(usable, 3);
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.precision, OUTPUT_PRECISION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and a validated config snapshot

pub mod constants;
