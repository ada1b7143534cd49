//! # Figure IO
//!
//! Text formats for the mesh generators.
//!
//! ## Formats
//!
//! - **Mesh files**: shape header, one `x y z` line per triangle corner,
//!   optional `normals` section mirroring the positions
//! - **Patch files**: patch count, 16 comma separated indices per patch,
//!   control point count, one `x, y, z` line per control point
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GlobalConfig;
//! use figure_io::{read_mesh, write_mesh};
//! use figure_mesh::{primitives, Sphere};
//!
//! let mesh = primitives::sphere(&Sphere::new(1.0, 6, 4))?;
//! let mut text = Vec::new();
//! write_mesh(&mut text, &mesh, &GlobalConfig::default())?;
//!
//! let data = read_mesh(text.as_slice())?;
//! assert_eq!(data.positions.len(), mesh.vertex_count());
//! assert_eq!(data.normals.len(), mesh.vertex_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bezier;
pub mod error;
pub mod reader;
pub mod writer;

pub use bezier::{parse_bezier, read_bezier};
pub use error::{IoError, IoResult};
pub use reader::{load_mesh, read_mesh, MeshData};
pub use writer::{save_mesh, write_mesh, write_sections};
