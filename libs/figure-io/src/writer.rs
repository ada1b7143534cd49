//! # Mesh Writer
//!
//! Text layout:
//!
//! ```text
//! sphere                  <- header naming the shape kind
//! 0.000000 1.000000 0.000000
//! ...                     <- one line per triangle corner, emission order
//! normals                 <- only when the mesh carries normals
//! 0.000000 1.000000 0.000000
//! ...
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use config::constants::GlobalConfig;
use figure_mesh::{Point, ShapeKind, TriangleMesh};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Line separating the positions from the normals section.
pub const NORMALS_MARKER: &str = "normals";

/// Header line written for `kind`.
///
/// # Example
///
/// ```rust
/// use figure_io::writer::header;
/// use figure_mesh::ShapeKind;
///
/// assert_eq!(header(ShapeKind::Box), "box");
/// ```
pub fn header(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Triangle => "triangle",
        ShapeKind::Rectangle => "rectangle",
        ShapeKind::Box => "box",
        ShapeKind::Cone => "cone",
        ShapeKind::Cylinder => "cylinder",
        ShapeKind::Sphere => "sphere",
        ShapeKind::Bezier => "bezier",
    }
}

/// Shape kind named by a header line, ignoring surrounding whitespace.
pub fn kind_from_header(line: &str) -> Option<ShapeKind> {
    let line = line.trim();
    ShapeKind::ALL.into_iter().find(|&kind| header(kind) == line)
}

/// Writes `mesh` in the text format.
///
/// # Example
///
/// ```rust
/// use config::constants::GlobalConfig;
/// use figure_io::write_mesh;
/// use figure_mesh::{primitives, Point, Triangle};
///
/// let mesh = primitives::triangle(&Triangle::new(Point::ZERO, Point::X, Point::Y));
/// let mut out = Vec::new();
/// write_mesh(&mut out, &mesh, &GlobalConfig::default()).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "triangle\n0.000000 0.000000 0.000000\n1.000000 0.000000 0.000000\n0.000000 1.000000 0.000000\n"
/// );
/// ```
pub fn write_mesh<W: Write>(out: &mut W, mesh: &TriangleMesh, config: &GlobalConfig) -> IoResult<()> {
    write_sections(
        out,
        mesh.kind(),
        mesh.positions(),
        mesh.normals().map(|_| mesh.normal_vectors()),
        config,
    )
}

/// Writes a header, the position lines and, when `normals` is `Some`, the
/// marker followed by the normal lines.
///
/// [`write_mesh`] goes through here; so can data loaded with
/// [`crate::read_mesh`], which lets a file be rewritten without rebuilding
/// the mesh.
pub fn write_sections<W, P, N>(
    out: &mut W,
    kind: ShapeKind,
    positions: P,
    normals: Option<N>,
    config: &GlobalConfig,
) -> IoResult<()>
where
    W: Write,
    P: IntoIterator<Item = Point>,
    N: IntoIterator<Item = Point>,
{
    writeln!(out, "{}", header(kind))?;
    for p in positions {
        write_point(out, p, config.precision)?;
    }

    if let Some(normals) = normals {
        writeln!(out, "{NORMALS_MARKER}")?;
        for n in normals {
            write_point(out, n, config.precision)?;
        }
    }

    Ok(())
}

/// Writes `mesh` to a file, replacing any previous content.
///
/// The text goes to `<name>.tmp` next to `path` and is renamed over `path`
/// once synced, so a failed write leaves the previous file untouched.
pub fn save_mesh(path: impl AsRef<Path>, mesh: &TriangleMesh, config: &GlobalConfig) -> IoResult<()> {
    let path = path.as_ref();
    let tmp_path = match path.file_name() {
        Some(name) => {
            let mut tmp_name = OsString::from(name);
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => {
            return Err(IoError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "mesh path has no file name",
            )))
        }
    };

    let written = write_file(&tmp_path, mesh, config)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(IoError::from));
    if let Err(err) = written {
        // Best effort cleanup.
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    debug!(
        path = %path.display(),
        kind = header(mesh.kind()),
        vertices = mesh.vertex_count(),
        "wrote mesh"
    );
    Ok(())
}

fn write_file(path: &Path, mesh: &TriangleMesh, config: &GlobalConfig) -> IoResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_mesh(&mut out, mesh, config)?;
    let file = out.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn write_point<W: Write>(out: &mut W, p: Point, precision: usize) -> IoResult<()> {
    writeln!(
        out,
        "{:.*} {:.*} {:.*}",
        precision, p.x, precision, p.y, precision, p.z
    )?;
    Ok(())
}
