//! Figure generation: shape parameters in, mesh file out.

use anyhow::{Context, Result};
use config::constants::GlobalConfig;
use figure_io::{read_bezier, save_mesh};
use figure_mesh::{
    primitives, Cone, Cuboid, Cylinder, Rectangle, Sphere, Triangle, TriangleMesh,
};
use std::path::{Path, PathBuf};

/// A fully specified figure request.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// A single triangle
    Triangle(Triangle),
    /// A subdivided rectangle
    Rectangle {
        /// Rectangle corners
        shape: Rectangle,
        /// Grid resolution per side
        divisions: u32,
    },
    /// A box with subdivided faces
    Box {
        /// Top and bottom faces
        shape: Cuboid,
        /// Grid resolution per face side
        divisions: u32,
    },
    /// A cone
    Cone(Cone),
    /// A cylinder
    Cylinder(Cylinder),
    /// A sphere
    Sphere(Sphere),
    /// Bezier patches read from a file
    Bezier {
        /// Path of the patch file
        patch_file: PathBuf,
        /// Sampling level per patch
        tessellation: u32,
    },
}

/// Builds the mesh for `figure`.
pub fn build(figure: &Figure) -> Result<TriangleMesh> {
    let mesh = match figure {
        Figure::Triangle(shape) => primitives::triangle(shape),
        Figure::Rectangle { shape, divisions } => primitives::rectangle(shape, *divisions)?,
        Figure::Box { shape, divisions } => primitives::cuboid(shape, *divisions)?,
        Figure::Cone(shape) => primitives::cone(shape)?,
        Figure::Cylinder(shape) => primitives::cylinder(shape)?,
        Figure::Sphere(shape) => primitives::sphere(shape)?,
        Figure::Bezier {
            patch_file,
            tessellation,
        } => {
            let surface = read_bezier(patch_file)
                .with_context(|| format!("Failed to read patch file {:?}", patch_file))?;
            primitives::bezier(&surface, *tessellation)?
        }
    };
    Ok(mesh)
}

/// Builds `figure` and writes it to `output`. Nothing is written when
/// generation fails.
pub fn generate(figure: &Figure, output: &Path, config: &GlobalConfig) -> Result<TriangleMesh> {
    let mesh = build(figure).context("Failed to generate figure")?;
    save_mesh(output, &mesh, config)
        .with_context(|| format!("Failed to write {:?}", output))?;

    tracing::info!(
        "Wrote {} triangles ({:?}) to {:?}",
        mesh.triangle_count(),
        mesh.kind(),
        output
    );
    Ok(mesh)
}
