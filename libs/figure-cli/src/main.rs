//! generator - writes triangulated figures to mesh files
//!
//! Each subcommand builds one primitive and writes it in the text mesh
//! format; `inspect` summarizes an existing file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::constants::{GlobalConfig, DEFAULT_DIVISIONS, OUTPUT_PRECISION};
use figure_cli::{generate, inspect, Figure};
use figure_mesh::{Cone, Cuboid, Cylinder, Point, Rectangle, Sphere, Triangle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generator")]
#[command(about = "Triangulated figure generator")]
#[command(version)]
struct Cli {
    /// Decimal places written per coordinate
    #[arg(long, global = true, default_value_t = OUTPUT_PRECISION)]
    precision: usize,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// A single triangle from three corners
    #[command(allow_negative_numbers = true)]
    Triangle {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
        x3: f64,
        y3: f64,
        z3: f64,
        /// Output mesh file
        output: PathBuf,
    },

    /// A rectangle on the XZ plane, centered at the origin
    Rectangle {
        width: f64,
        depth: f64,
        /// Output mesh file
        output: PathBuf,
        /// Grid resolution per side
        #[arg(short, long, default_value_t = DEFAULT_DIVISIONS)]
        divisions: u32,
    },

    /// An axis-aligned box centered at the origin
    Box {
        width: f64,
        height: f64,
        depth: f64,
        /// Output mesh file
        output: PathBuf,
        /// Grid resolution per face side
        #[arg(short, long, default_value_t = DEFAULT_DIVISIONS)]
        divisions: u32,
    },

    /// A cone standing on the XZ plane
    Cone {
        radius: f64,
        height: f64,
        slices: u32,
        stacks: u32,
        /// Output mesh file
        output: PathBuf,
    },

    /// A capped cylinder centered at the origin
    Cylinder {
        radius: f64,
        height: f64,
        slices: u32,
        stacks: u32,
        /// Output mesh file
        output: PathBuf,
    },

    /// A sphere centered at the origin, with normals
    Sphere {
        radius: f64,
        slices: u32,
        stacks: u32,
        /// Output mesh file
        output: PathBuf,
    },

    /// Bezier patches from a patch file
    Bezier {
        /// Input patch file
        patch_file: PathBuf,
        /// Sampling level per patch
        tessellation: u32,
        /// Output mesh file
        output: PathBuf,
    },

    /// Print kind, counts and bounding box of a mesh file
    Inspect {
        /// Mesh file to read
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = GlobalConfig::new(cli.precision).context("Invalid --precision")?;

    let (figure, output) = match cli.command {
        Commands::Inspect { file } => {
            print!("{}", inspect(&file)?);
            return Ok(());
        }
        Commands::Triangle {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            x3,
            y3,
            z3,
            output,
        } => (
            Figure::Triangle(Triangle::new(
                Point::new(x1, y1, z1),
                Point::new(x2, y2, z2),
                Point::new(x3, y3, z3),
            )),
            output,
        ),
        Commands::Rectangle {
            width,
            depth,
            output,
            divisions,
        } => (
            Figure::Rectangle {
                shape: Rectangle::from_width_depth(width, depth),
                divisions,
            },
            output,
        ),
        Commands::Box {
            width,
            height,
            depth,
            output,
            divisions,
        } => (
            Figure::Box {
                shape: Cuboid::from_whd(width, height, depth),
                divisions,
            },
            output,
        ),
        Commands::Cone {
            radius,
            height,
            slices,
            stacks,
            output,
        } => (Figure::Cone(Cone::new(radius, height, slices, stacks)), output),
        Commands::Cylinder {
            radius,
            height,
            slices,
            stacks,
            output,
        } => (
            Figure::Cylinder(Cylinder::new(radius, height, slices, stacks)),
            output,
        ),
        Commands::Sphere {
            radius,
            slices,
            stacks,
            output,
        } => (Figure::Sphere(Sphere::new(radius, slices, stacks)), output),
        Commands::Bezier {
            patch_file,
            tessellation,
            output,
        } => (
            Figure::Bezier {
                patch_file,
                tessellation,
            },
            output,
        ),
    };

    tracing::debug!("Generating {:?}", figure);
    generate(&figure, &output, &config)?;
    Ok(())
}
