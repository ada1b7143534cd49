//! # Mesh Reader
//!
//! Reads the text layout produced by [`crate::writer`]: a header line, then
//! position triplets up to an optional `normals` marker, then normal triplets.
//! Blank lines are ignored anywhere.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use figure_mesh::mesh::bounding_box;
use figure_mesh::{Point, ShapeKind};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::writer::{kind_from_header, NORMALS_MARKER};

/// Vertex data read back from a mesh file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// Kind named by the header, `None` when the header is not recognized
    pub kind: Option<ShapeKind>,
    /// Triangle corners in file order
    pub positions: Vec<Point>,
    /// Normals in file order, empty when the file has no normals section
    pub normals: Vec<Point>,
}

impl MeshData {
    /// Number of complete triangles.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Axis-aligned bounding box of the positions.
    pub fn bounding_box(&self) -> (Point, Point) {
        bounding_box(self.positions.iter().copied())
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Positions,
    Normals,
}

/// Reads a mesh from any buffered source.
///
/// # Errors
///
/// [`IoError::MalformedInput`] when the header is missing, a line is not three
/// numbers, the marker appears twice, the position count is not a multiple
/// of three, or a normals marker is not followed by exactly one normal per
/// position.
///
/// # Example
///
/// ```rust
/// use figure_io::read_mesh;
/// use figure_mesh::ShapeKind;
///
/// let text = "triangle\n0 0 0\n1 0 0\n0 1 0\n";
/// let data = read_mesh(text.as_bytes()).unwrap();
/// assert_eq!(data.kind, Some(ShapeKind::Triangle));
/// assert_eq!(data.triangle_count(), 1);
/// ```
pub fn read_mesh<R: BufRead>(input: R) -> IoResult<MeshData> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| IoError::malformed(1, "missing header line"))?;

    let mut data = MeshData {
        kind: kind_from_header(&header),
        ..MeshData::default()
    };
    let mut section = Section::Positions;
    let mut last_line = 1;

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let number = idx + 2;
        last_line = number;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }
        if text == NORMALS_MARKER {
            if section == Section::Normals {
                return Err(IoError::malformed(number, "duplicate normals marker"));
            }
            section = Section::Normals;
            continue;
        }

        let p = parse_triplet(text, number)?;
        match section {
            Section::Positions => data.positions.push(p),
            Section::Normals => data.normals.push(p),
        }
    }

    if data.positions.len() % 3 != 0 {
        return Err(IoError::malformed(
            last_line,
            format!(
                "{} positions do not form whole triangles",
                data.positions.len()
            ),
        ));
    }
    if section == Section::Normals && data.normals.len() != data.positions.len() {
        return Err(IoError::malformed(
            last_line,
            format!(
                "{} normals for {} positions",
                data.normals.len(),
                data.positions.len()
            ),
        ));
    }

    Ok(data)
}

/// Reads a mesh file from disk.
pub fn load_mesh(path: impl AsRef<Path>) -> IoResult<MeshData> {
    let path = path.as_ref();
    let data = read_mesh(BufReader::new(File::open(path)?))?;

    debug!(
        path = %path.display(),
        kind = ?data.kind,
        positions = data.positions.len(),
        normals = data.normals.len(),
        "read mesh"
    );
    Ok(data)
}

fn parse_triplet(text: &str, line: usize) -> IoResult<Point> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x, y, z] = fields[..] else {
        return Err(IoError::malformed(
            line,
            format!("expected 3 coordinates, found {}", fields.len()),
        ));
    };

    let parse = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|_| IoError::malformed(line, format!("invalid coordinate '{field}'")))
    };
    Ok(Point::new(parse(x)?, parse(y)?, parse(z)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_positions_and_normals() {
        let text = "sphere\n0 1 0\n1 0 0\n0 0 1\nnormals\n0 1 0\n1 0 0\n0 0 1\n";
        let data = read_mesh(text.as_bytes()).unwrap();
        assert_eq!(data.kind, Some(ShapeKind::Sphere));
        assert_eq!(data.positions.len(), 3);
        assert_eq!(data.normals, data.positions);
    }

    #[test]
    fn test_unknown_header_is_kept_as_none() {
        let data = read_mesh("teapot\n0 0 0\n0 0 0\n0 0 0\n".as_bytes()).unwrap();
        assert_eq!(data.kind, None);
        assert_eq!(data.triangle_count(), 1);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let text = "box\n\n0 0 0\n  \n1 1 1\n2 2 2\n\n";
        let data = read_mesh(text.as_bytes()).unwrap();
        assert_eq!(data.positions.len(), 3);
        assert_eq!(data.bounding_box().1, Point::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_header_only_is_empty_mesh() {
        let data = read_mesh("cone\n".as_bytes()).unwrap();
        assert_eq!(data.kind, Some(ShapeKind::Cone));
        assert!(data.positions.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = read_mesh("".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_bad_line_reports_its_number() {
        let err = read_mesh("cone\n0 0 0\n1 x 0\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("'x'"));

        let err = read_mesh("cone\n0 0\n".as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_partial_triangle_is_rejected() {
        let err = read_mesh("cone\n0 0 0\n1 0 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn test_mismatched_normals_are_rejected() {
        let text = "sphere\n0 0 0\n1 0 0\n0 1 0\nnormals\n0 0 1\n";
        assert!(read_mesh(text.as_bytes()).is_err());
    }

    #[test]
    fn test_marker_without_normals_is_rejected() {
        let text = "sphere\n0 0 0\n1 0 0\n0 1 0\nnormals\n";
        let err = read_mesh(text.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(5));
        assert!(err.to_string().contains("0 normals for 3 positions"));

        let text = "sphere\n0 0 0\n1 0 0\n0 1 0\nnormals\n\n\n";
        assert!(read_mesh(text.as_bytes()).is_err());
    }

    #[test]
    fn test_marker_on_empty_mesh_is_accepted() {
        let data = read_mesh("sphere\nnormals\n".as_bytes()).unwrap();
        assert!(data.positions.is_empty());
        assert!(data.normals.is_empty());
    }

    #[test]
    fn test_duplicate_marker_is_rejected() {
        let text = "sphere\nnormals\nnormals\n";
        let err = read_mesh(text.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
